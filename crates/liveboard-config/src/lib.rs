//! Configuration for the liveboard dashboard.
//!
//! Layered loading (defaults → TOML file → `LIVEBOARD_*` environment) and
//! translation to `liveboard_core::DashboardConfig`. The binary adds its
//! flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use liveboard_core::{DashboardConfig, ViewBinding};

pub const ENV_PREFIX: &str = "LIVEBOARD_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// On-disk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Status API base URL.
    pub api_url: String,

    /// Seconds between polls; 0 polls once.
    pub poll_interval_secs: u64,

    /// History rows shown in the detail overlay.
    pub history_limit: u32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Where `watch` and `snapshot` write the rendered page.
    pub output: PathBuf,

    /// Extra PEM root certificate for self-hosted HTTPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// Display offset such as `+08:00`; the machine's offset when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,

    /// Host page element ids.
    pub binding: ViewBinding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".into(),
            poll_interval_secs: 30,
            history_limit: 10,
            timeout_secs: 10,
            output: PathBuf::from("liveboard.html"),
            ca_cert: None,
            utc_offset: None,
            binding: ViewBinding::default(),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "liveboard", "liveboard").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("liveboard");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the full Config from file + environment.
///
/// `path` overrides the platform config location. A missing file is not
/// an error; defaults and environment still apply.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let config: Config = figment(&path).extract()?;
    Ok(config)
}

/// Load config, falling back to defaults on any error.
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it, returning the path written.
pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(path)
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a validated `DashboardConfig`.
pub fn to_dashboard_config(cfg: &Config) -> Result<DashboardConfig, ConfigError> {
    let api_url = parse_api_url(&cfg.api_url)?;

    if cfg.history_limit == 0 {
        return Err(ConfigError::Validation {
            field: "history_limit".into(),
            reason: "must be at least 1".into(),
        });
    }
    if cfg.timeout_secs == 0 {
        return Err(ConfigError::Validation {
            field: "timeout_secs".into(),
            reason: "must be at least 1".into(),
        });
    }

    let utc_offset = cfg
        .utc_offset
        .as_deref()
        .map(parse_utc_offset)
        .transpose()?;

    let mut dashboard = DashboardConfig::new(api_url);
    dashboard.poll_interval = Duration::from_secs(cfg.poll_interval_secs);
    dashboard.history_limit = cfg.history_limit;
    dashboard.timeout = Duration::from_secs(cfg.timeout_secs);
    dashboard.ca_cert.clone_from(&cfg.ca_cert);
    dashboard.utc_offset = utc_offset;
    dashboard.binding = cfg.binding.clone();
    Ok(dashboard)
}

/// Parse and check an API base URL (http or https only).
pub fn parse_api_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: "utc_offset".into(),
        reason: format!("expected an offset like +08:00, got '{raw}'"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_translate() {
        let dash = to_dashboard_config(&Config::default()).unwrap();
        assert_eq!(dash.api_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(dash.poll_interval, Duration::from_secs(30));
        assert_eq!(dash.history_limit, 10);
        assert_eq!(dash.utc_offset, None);
    }

    #[test]
    fn offset_parses() {
        let cfg = Config {
            utc_offset: Some("+08:00".into()),
            ..Config::default()
        };
        let dash = to_dashboard_config(&cfg).unwrap();
        assert_eq!(dash.utc_offset, FixedOffset::east_opt(8 * 3600));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_url = Config {
            api_url: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(matches!(
            to_dashboard_config(&bad_url),
            Err(ConfigError::Validation { ref field, .. }) if field == "api_url"
        ));

        let bad_limit = Config {
            history_limit: 0,
            ..Config::default()
        };
        assert!(to_dashboard_config(&bad_limit).is_err());

        let bad_offset = Config {
            utc_offset: Some("Beijing".into()),
            ..Config::default()
        };
        assert!(matches!(
            to_dashboard_config(&bad_offset),
            Err(ConfigError::Validation { ref field, .. }) if field == "utc_offset"
        ));
    }
}
