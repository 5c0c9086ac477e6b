// ── Admin facade ──
//
// One method per admin operation. Each call sends exactly one request,
// translates the response into the domain model, and keeps nothing.

use std::time::Duration;

use tracing::{debug, info};

use icefly_api::AdminClient;

use crate::config::AdminConfig;
use crate::error::CoreError;
use crate::model::{Listener, Mount, ServerSnapshot, SourceSnapshot, TrackMetadataUpdate};

/// Typed access to an Icecast server's admin interface.
#[derive(Debug)]
pub struct Admin {
    client: AdminClient,
    timeout: Duration,
}

impl Admin {
    /// Build an admin handle from a config.
    ///
    /// Fails with [`CoreError::Config`] when the username or password is
    /// empty, before anything is sent.
    pub fn new(config: &AdminConfig) -> Result<Self, CoreError> {
        let client = AdminClient::new(
            config.url.as_str(),
            &config.username,
            config.password.clone(),
            &config.transport(),
        )?;
        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Wrap an existing client (e.g. one pointed at a mock server).
    ///
    /// `timeout` should match the one the client's HTTP stack was built
    /// with; it is reported back in [`CoreError::Timeout`].
    pub fn with_client(client: AdminClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// The server this handle talks to.
    pub fn url(&self) -> &url::Url {
        self.client.base_url()
    }

    fn lift(&self, err: icefly_api::Error) -> CoreError {
        match CoreError::from(err) {
            CoreError::Timeout { .. } => CoreError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            },
            other => other,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Fetch server and per-source statistics.
    pub async fn stats(&self) -> Result<ServerSnapshot, CoreError> {
        let wire = self.client.stats().await.map_err(|e| self.lift(e))?;
        let snapshot = ServerSnapshot::from(wire);
        debug!(sources = snapshot.mounts().len(), "stats translated");
        Ok(snapshot)
    }

    /// Fetch statistics and pick out one source.
    pub async fn source(&self, mount: &str) -> Result<SourceSnapshot, CoreError> {
        let snapshot = self.stats().await?;
        snapshot
            .source(mount)
            .cloned()
            .ok_or_else(|| CoreError::SourceNotFound {
                mount: mount.into(),
            })
    }

    /// List mounted sources.
    pub async fn list_mounts(&self) -> Result<Vec<Mount>, CoreError> {
        let mounts = self.client.list_mounts().await.map_err(|e| self.lift(e))?;
        Ok(mounts.into_iter().map(Mount::from).collect())
    }

    /// List listeners connected to a mount.
    pub async fn list_clients(&self, mount: &str) -> Result<Vec<Listener>, CoreError> {
        let listeners = self
            .client
            .list_clients(mount)
            .await
            .map_err(|e| self.lift(e))?;
        Ok(listeners.into_iter().map(Listener::from).collect())
    }

    // ── Control operations ───────────────────────────────────────────

    /// Push track metadata to a mount.
    pub async fn update_metadata(
        &self,
        mount: &str,
        meta: &TrackMetadataUpdate,
    ) -> Result<(), CoreError> {
        self.client
            .update_metadata(mount, &meta.to_query())
            .await
            .map_err(|e| self.lift(e))?;
        info!(mount, "metadata updated");
        Ok(())
    }

    /// Change the fallback mount of a source.
    pub async fn update_fallback(&self, mount: &str, fallback: &str) -> Result<(), CoreError> {
        self.client
            .update_fallback(mount, fallback)
            .await
            .map_err(|e| self.lift(e))?;
        info!(mount, fallback, "fallback updated");
        Ok(())
    }

    /// Move every listener of `mount` to `destination`.
    pub async fn move_clients(&self, mount: &str, destination: &str) -> Result<(), CoreError> {
        self.client
            .move_clients(mount, destination)
            .await
            .map_err(|e| self.lift(e))?;
        info!(mount, destination, "clients moved");
        Ok(())
    }

    /// Disconnect one listener.
    pub async fn kill_client(&self, mount: &str, id: u64) -> Result<(), CoreError> {
        self.client
            .kill_client(mount, id)
            .await
            .map_err(|e| self.lift(e))?;
        info!(mount, id, "client killed");
        Ok(())
    }

    /// Disconnect the source feeding a mount.
    pub async fn kill_source(&self, mount: &str) -> Result<(), CoreError> {
        self.client
            .kill_source(mount)
            .await
            .map_err(|e| self.lift(e))?;
        info!(mount, "source killed");
        Ok(())
    }
}
