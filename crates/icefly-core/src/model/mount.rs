// ── Mount and listener domain types ──

use serde::{Deserialize, Serialize};

/// A mounted source from `/admin/listmounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub path: String,
    pub listeners: u64,
    /// Seconds since the source connected.
    pub connected: u64,
    pub content_type: String,
}

/// A listener from `/admin/listclients`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    pub id: u64,
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
    pub lag: u64,
    /// Seconds since the listener connected.
    pub connected: u64,
}
