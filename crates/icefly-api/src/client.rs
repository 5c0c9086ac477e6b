// Admin API HTTP client
//
// Wraps `reqwest::Client` with Icecast-specific URL construction, basic
// auth, XML decoding, and `<iceresponse>` checking. Endpoint wrappers are
// one-liners over `fetch` + `decode`; everything interesting happens in
// the translation layer of `icefly-core`.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::Error;
use crate::models::{WireClientList, WireListener, WireMount, WireMountList, WireResponse, WireStats};
use crate::transport::TransportConfig;

/// Raw HTTP client for the Icecast `/admin/*` endpoints.
///
/// Returns wire types; callers wanting the stable domain model go
/// through `icefly_core::Admin` instead.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new admin client.
    ///
    /// Fails before touching the network if the URL, username, or
    /// password is empty (checked in that order).
    pub fn new(
        url: &str,
        username: &str,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        if url.is_empty() {
            return Err(Error::Configuration { field: "URL" });
        }
        if username.is_empty() {
            return Err(Error::Configuration { field: "Username" });
        }
        if password.expose_secret().is_empty() {
            return Err(Error::Configuration { field: "Password" });
        }

        let base_url = Url::parse(url)?;
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, username.into(), password))
    }

    /// Create an admin client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/admin/{endpoint}`.
    pub(crate) fn admin_url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/admin/{endpoint}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET and return the raw body.
    ///
    /// `query` pairs are appended in order; `raw_query`, if given, is
    /// appended verbatim after them and must already be escaped.
    pub(crate) async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        raw_query: Option<&str>,
    ) -> Result<String, Error> {
        let mut url = self.admin_url(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        if let Some(raw) = raw_query.filter(|r| !r.is_empty()) {
            let joined = match url.query() {
                Some(existing) => format!("{existing}&{raw}"),
                None => raw.to_owned(),
            };
            url.set_query(Some(&joined));
        }

        debug!(endpoint, "GET {}", url.path());

        let resp = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(reqwest::header::ACCEPT, "application/xml")
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        trace!(endpoint, bytes = body.len(), "response received");
        Ok(body)
    }

    /// Decode an XML body into a wire type.
    pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        quick_xml::de::from_str(body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.to_owned(),
            }
        })
    }

    /// Send a control request and check the `<iceresponse>` it returns.
    async fn control(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<(), Error> {
        let body = self.fetch(endpoint, query, None).await?;
        check_response(&Self::decode(&body)?)
    }

    // ── Read endpoints ───────────────────────────────────────────────

    /// Fetch global and per-source statistics.
    ///
    /// `GET /admin/stats`
    pub async fn stats(&self) -> Result<WireStats, Error> {
        let body = self.fetch("stats", &[], None).await?;
        Self::decode(&body)
    }

    /// List mounted sources.
    ///
    /// `GET /admin/listmounts`
    pub async fn list_mounts(&self) -> Result<Vec<WireMount>, Error> {
        let body = self.fetch("listmounts", &[], None).await?;
        let list: WireMountList = Self::decode(&body)?;
        Ok(list.source)
    }

    /// List listeners connected to a mount.
    ///
    /// `GET /admin/listclients?mount=...`
    pub async fn list_clients(&self, mount: &str) -> Result<Vec<WireListener>, Error> {
        let body = self.fetch("listclients", &[("mount", mount)], None).await?;
        let list: WireClientList = Self::decode(&body)?;
        Ok(list.into_listeners())
    }

    // ── Control endpoints ────────────────────────────────────────────

    /// Update the track metadata of a mount.
    ///
    /// `GET /admin/metadata?mode=updinfo&mount=...&{encoded}` where
    /// `encoded` is an already-escaped query fragment (`song=...&title=...`).
    pub async fn update_metadata(&self, mount: &str, encoded: &str) -> Result<(), Error> {
        debug!(mount, "updating metadata");
        let body = self
            .fetch("metadata", &[("mode", "updinfo"), ("mount", mount)], Some(encoded))
            .await?;
        check_response(&Self::decode(&body)?)
    }

    /// Change the fallback mount of a source.
    ///
    /// `GET /admin/fallback?mount=...&fallback=...`
    pub async fn update_fallback(&self, mount: &str, fallback: &str) -> Result<(), Error> {
        debug!(mount, fallback, "updating fallback");
        self.control("fallback", &[("mount", mount), ("fallback", fallback)])
            .await
    }

    /// Move all listeners of one mount to another.
    ///
    /// `GET /admin/moveclients?mount=...&destination=...`
    pub async fn move_clients(&self, mount: &str, destination: &str) -> Result<(), Error> {
        debug!(mount, destination, "moving clients");
        self.control(
            "moveclients",
            &[("mount", mount), ("destination", destination)],
        )
        .await
    }

    /// Disconnect one listener.
    ///
    /// `GET /admin/killclient?mount=...&id=...`
    pub async fn kill_client(&self, mount: &str, id: u64) -> Result<(), Error> {
        debug!(mount, id, "killing client");
        let id = id.to_string();
        self.control("killclient", &[("mount", mount), ("id", &id)])
            .await
    }

    /// Disconnect the source client feeding a mount.
    ///
    /// `GET /admin/killsource?mount=...`
    pub async fn kill_source(&self, mount: &str) -> Result<(), Error> {
        debug!(mount, "killing source");
        self.control("killsource", &[("mount", mount)]).await
    }
}

/// Map a decoded `<iceresponse>` to a result.
fn check_response(resp: &WireResponse) -> Result<(), Error> {
    if resp.is_success() {
        return Ok(());
    }
    warn!(message = %resp.message, code = resp.code, "operation rejected by server");
    Err(Error::Rejected {
        message: resp.message.clone(),
    })
}
