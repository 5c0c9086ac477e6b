// ── Core error types ──
//
// User-facing errors from icefly-core. Consumers never see reqwest or
// quick-xml errors directly: the `From<icefly_api::Error>` impl folds
// transport-layer failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Server request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Source not found: {mount}")]
    SourceNotFound { mount: String },

    #[error("Unreadable server response: {message}")]
    Decode { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected by server: {message}")]
    Rejected { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// `true` for errors raised before any request was sent.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<icefly_api::Error> for CoreError {
    fn from(err: icefly_api::Error) -> Self {
        match err {
            icefly_api::Error::Configuration { .. } | icefly_api::Error::InvalidUrl(_) => {
                CoreError::Config {
                    message: err.to_string(),
                }
            }
            icefly_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            icefly_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.origin().ascii_serialization())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            icefly_api::Error::HttpStatus { status: 401 | 403 } => {
                CoreError::AuthenticationFailed {
                    message: err.to_string(),
                }
            }
            icefly_api::Error::HttpStatus { status } => CoreError::Api {
                message: err.to_string(),
                status: Some(status),
            },
            icefly_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
            icefly_api::Error::Rejected { message } => CoreError::Rejected { message },
        }
    }
}
