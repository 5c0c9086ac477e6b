use thiserror::Error;

/// Top-level error type for the `icefly-api` crate.
///
/// Covers every failure mode of the admin interface: client
/// configuration, transport, response decoding, and operations the
/// server refused. `icefly-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// A required construction parameter was empty.
    #[error("{field} is empty")]
    Configuration { field: &'static str },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Transport ───────────────────────────────────────────────────
    /// The request could not be sent (connection refused, DNS failure, etc.)
    #[error("Can't send request to Icecast API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something other than HTTP 200.
    #[error("API returned non-ok status code {status}")]
    HttpStatus { status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// XML decoding failed, with the raw body for debugging.
    #[error("Can't parse API response: {message}")]
    Deserialization { message: String, body: String },

    // ── Operations ──────────────────────────────────────────────────
    /// The server's `<iceresponse>` reported failure. Carries the
    /// server-supplied message verbatim.
    #[error("{message}")]
    Rejected { message: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
