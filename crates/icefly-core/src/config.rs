// ── Runtime connection configuration ──
//
// These types describe *how* to reach an Icecast server. They carry
// credentials and connection tuning, but never touch disk: the CLI (or
// an embedding program) builds an `AdminConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for talking to a single server.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Server URL (e.g., `http://127.0.0.1:8000`).
    pub url: Url,
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Application name and version prefixed to the user agent.
    pub user_agent: Option<(String, String)>,
}

impl AdminConfig {
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }

    pub(crate) fn transport(&self) -> icefly_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => icefly_api::TlsMode::System,
            TlsVerification::CustomCa(path) => icefly_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => icefly_api::TlsMode::DangerAcceptInvalid,
        };
        let transport = icefly_api::TransportConfig {
            tls,
            timeout: self.timeout,
            ..Default::default()
        };
        match &self.user_agent {
            Some((app, version)) => transport.with_user_agent(app, version),
            None => transport,
        }
    }
}
