//! Config subcommand handlers.

use liveboard_config::{Config, config_path, save_config};

use super::load_settings;
use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = global.config.clone().unwrap_or_else(config_path);

    match args.command {
        ConfigCommand::Show => {
            let cfg = load_settings(global)?;
            let toml_str = toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                message: format!("failed to serialize config: {e}"),
            })?;
            print!("{toml_str}");
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            let written = save_config(&Config::default(), Some(&path))?;
            eprintln!("Wrote default configuration to {}", written.display());
            Ok(())
        }
    }
}
