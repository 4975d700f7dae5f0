//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use liveboard_config::ConfigError;
use liveboard_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the status API at {url}")]
    #[diagnostic(
        code(liveboard::unreachable),
        help(
            "Check that the status server is running.\n\
             Reason: {reason}\n\
             Try: liveboard --api-url http://host:port snapshot"
        )
    )]
    Unreachable { url: String, reason: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Status API error: {message}")]
    #[diagnostic(code(liveboard::api_error))]
    Api { message: String },

    #[error("Poll failed: {reason}")]
    #[diagnostic(
        code(liveboard::poll_failed),
        help("The previous page, if any, was left untouched.")
    )]
    PollFailed { reason: String },

    #[error("Could not load statistics for '{id}'")]
    #[diagnostic(
        code(liveboard::detail_failed),
        help("Run with -v to see the underlying error, or check the id with: liveboard snapshot --stdout")
    )]
    DetailFailed { id: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(liveboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists")]
    #[diagnostic(
        code(liveboard::config_exists),
        help("Use --force to overwrite it.\nPath: {path}")
    )]
    ConfigExists { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(liveboard::config))]
    Config { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unreachable { .. } => exit_code::CONNECTION,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::DetailFailed { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unreachable { url, reason } => CliError::Unreachable { url, reason },
            CoreError::Rejected { message, .. } | CoreError::Malformed { message } => {
                CliError::Api { message }
            }
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Api { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
