//! Command handlers.

pub mod config_cmd;
pub mod detail;
pub mod snapshot;
pub mod watch;

use std::path::Path;

use liveboard_config::Config;
use liveboard_core::{CoreError, Dashboard};
use tracing::debug;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Load file + env configuration, then apply global flag overrides.
pub fn load_settings(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = liveboard_config::load_config(global.config.as_deref())?;
    if let Some(ref url) = global.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout_secs = timeout;
    }
    Ok(cfg)
}

pub fn build_dashboard(cfg: &Config) -> Result<Dashboard, CliError> {
    let dashboard_config = liveboard_config::to_dashboard_config(cfg)?;
    Ok(Dashboard::new(dashboard_config)?)
}

/// A poll that ran but failed. Connection failures keep their own exit
/// code; anything else is a failed poll.
pub fn poll_error(err: CoreError) -> CliError {
    match err {
        CoreError::Unreachable { .. } => CliError::from(err),
        other => CliError::PollFailed {
            reason: other.to_string(),
        },
    }
}

/// Replace the page at `path`, going through a sibling temp file so a
/// browser reloading mid-write never sees a truncated page.
pub async fn write_page(path: &Path, html: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    tokio::fs::write(&tmp, html).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        // Config commands never touch the network.
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Watch(args) => {
            let mut settings = load_settings(global)?;
            if let Some(secs) = args.interval {
                settings.poll_interval_secs = secs;
            }
            let output = args.output.unwrap_or_else(|| settings.output.clone());
            watch::handle(&build_dashboard(&settings)?, &output).await
        }
        Command::Snapshot(args) => {
            let settings = load_settings(global)?;
            let target = if args.stdout {
                None
            } else {
                Some(args.output.unwrap_or_else(|| settings.output.clone()))
            };
            snapshot::handle(&build_dashboard(&settings)?, target.as_deref()).await
        }
        Command::Detail(args) => {
            let settings = load_settings(global)?;
            detail::handle(&build_dashboard(&settings)?, args).await
        }
    }
}
