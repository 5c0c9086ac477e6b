// ── Server domain types ──

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source::SourceSnapshot;

/// Everything `/admin/stats` reports about a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    /// Admin contact, usually an e-mail address.
    pub admin: String,
    pub host: String,
    pub location: String,
    /// When the server started. `None` if the server sent no parseable time.
    pub start: Option<DateTime<Utc>>,
    pub info: ServerInfo,
    pub stats: ServerStatistics,
    /// Sources keyed by mount path exactly as the server reported it
    /// (with or without the leading `/`). `None` when the response
    /// carried no `<source>` elements at all.
    pub sources: Option<HashMap<String, SourceSnapshot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server identifier, e.g. `Icecast 2.4.4`.
    pub id: String,
    pub build: u64,
}

/// Server-wide counters. Byte and bit totals are in base units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatistics {
    pub banned_ips: u64,
    pub client_connections: u64,
    pub clients: u64,
    pub connections: u64,
    pub file_connections: u64,
    pub listener_connections: u64,
    pub listeners: u64,
    /// Bits per second.
    pub outgoing_bitrate: u64,
    pub source_client_connections: u64,
    pub source_relay_connections: u64,
    pub source_total_connections: u64,
    pub sources: u64,
    pub stats: u64,
    pub stats_connections: u64,
    pub stream_bytes_read: u64,
    pub stream_bytes_sent: u64,
}

impl ServerSnapshot {
    /// Look up a source by mount path.
    ///
    /// Tries the path as given, then the other spelling of it: a bare
    /// path gets a leading `/`, a slashed path loses it. Servers disagree
    /// on whether mount keys carry the slash.
    pub fn source(&self, mount: &str) -> Option<&SourceSnapshot> {
        let sources = self.sources.as_ref()?;
        sources.get(mount).or_else(|| match mount.strip_prefix('/') {
            Some(bare) => sources.get(bare),
            None => sources.get(&format!("/{mount}")),
        })
    }

    /// Mount paths of all reported sources, sorted.
    pub fn mounts(&self) -> Vec<&str> {
        let mut mounts: Vec<&str> = self
            .sources
            .iter()
            .flat_map(|s| s.keys().map(String::as_str))
            .collect();
        mounts.sort_unstable();
        mounts
    }
}
