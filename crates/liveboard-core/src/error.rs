// ── Core error types ──
//
// Consumers of liveboard-core never see reqwest or serde errors directly.
// The `From<liveboard_api::Error>` impl folds transport-layer detail into
// three outcomes: the API could not be reached, it answered but refused,
// or it answered with something unreadable.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach status API at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    // ── Response errors ──────────────────────────────────────────────
    #[error("Status API rejected the request: {message}")]
    Rejected {
        message: String,
        /// Envelope `code`, when the server sent one.
        code: Option<i64>,
        /// HTTP status, when the request failed at the HTTP layer.
        status: Option<u16>,
    },

    #[error("Malformed response from status API: {message}")]
    Malformed { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Worth waiting for the next poll cycle rather than reporting loudly.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable { .. } => true,
            Self::Rejected { status, .. } => status.is_some_and(|s| s >= 500),
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<liveboard_api::Error> for CoreError {
    fn from(err: liveboard_api::Error) -> Self {
        match err {
            liveboard_api::Error::Transport(ref e) if e.is_decode() => CoreError::Malformed {
                message: e.to_string(),
            },
            liveboard_api::Error::Transport(e) => CoreError::Unreachable {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            liveboard_api::Error::Tls(reason) => CoreError::Unreachable {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            liveboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            liveboard_api::Error::UnusableBaseUrl(url) => CoreError::Config {
                message: format!("Base URL cannot carry an API path: {url}"),
            },
            liveboard_api::Error::Http { status, message } => CoreError::Rejected {
                message,
                code: None,
                status: Some(status),
            },
            liveboard_api::Error::Api { code, message } => CoreError::Rejected {
                message,
                code: Some(code),
                status: None,
            },
            liveboard_api::Error::Deserialization { message, .. } => {
                CoreError::Malformed { message }
            }
        }
    }
}
