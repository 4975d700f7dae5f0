use thiserror::Error;

/// Top-level error type for the `liveboard-api` crate.
///
/// Covers transport failures, non-2xx responses, non-zero envelope codes
/// and malformed payloads. `liveboard-core` maps these into its own
/// soft-failure and overlay-failure handling.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("Base URL cannot be used for API requests: {0}")]
    UnusableBaseUrl(String),

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server responses ────────────────────────────────────────────
    /// Non-2xx HTTP status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Envelope carried a non-zero `code`.
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying on the
    /// next poll cycle.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
