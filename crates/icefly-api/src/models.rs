// Admin API wire types
//
// Decoding targets for the Icecast admin XML responses. Every field is
// optional on the wire: absent elements decode to their default, and
// numeric elements are parsed leniently because servers are inconsistent
// about field presence and formatting across versions.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Decode an element's text as a number, falling back to zero for blank
/// or non-numeric content instead of failing the whole document.
///
/// Counters are unsigned, so a negative value (`-3`) also decodes as zero.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or_default())
}

// ── Stats ────────────────────────────────────────────────────────────

/// Server statistics from `/admin/stats` (root `<icestats>`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireStats {
    pub admin: String,
    #[serde(rename = "banned_IPs", deserialize_with = "lenient")]
    pub banned_ips: u64,
    #[serde(deserialize_with = "lenient")]
    pub build: u64,
    #[serde(deserialize_with = "lenient")]
    pub client_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub clients: u64,
    #[serde(deserialize_with = "lenient")]
    pub connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub file_connections: u64,
    pub host: String,
    #[serde(deserialize_with = "lenient")]
    pub listener_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub listeners: u64,
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub outgoing_kbitrate: u64,
    pub server_id: String,
    pub server_start: String,
    #[serde(deserialize_with = "lenient")]
    pub source_client_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub source_relay_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub source_total_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub sources: u64,
    #[serde(deserialize_with = "lenient")]
    pub stats: u64,
    #[serde(deserialize_with = "lenient")]
    pub stats_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub stream_kbytes_read: u64,
    #[serde(deserialize_with = "lenient")]
    pub stream_kbytes_sent: u64,
    /// Per-mount source entries. Empty when the document has none.
    #[serde(rename = "source")]
    pub source: Vec<WireSource>,
}

/// One `<source mount="...">` entry inside `<icestats>`.
///
/// Carries every field name any server generation is known to emit:
/// the generic `audio_*` set, the legacy `ice-*` set parsed from the
/// `ice-audio-info` header, and the `mpeg_*` set reported for MP3 streams.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSource {
    #[serde(rename = "@mount")]
    pub mount: String,
    pub artist: String,
    pub title: String,
    pub artwork: String,
    #[serde(deserialize_with = "lenient")]
    pub audio_bitrate: u64,
    #[serde(deserialize_with = "lenient")]
    pub audio_channels: u32,
    pub audio_info: String,
    #[serde(rename = "audio_codecid", deserialize_with = "lenient")]
    pub audio_codec_id: u32,
    #[serde(deserialize_with = "lenient")]
    pub audio_samplerate: u32,
    #[serde(deserialize_with = "lenient")]
    pub mpeg_channels: u32,
    #[serde(deserialize_with = "lenient")]
    pub mpeg_samplerate: u32,
    /// Free-form bitrate label, e.g. `"128"`, `"128000"` or `"Quality 0"`.
    pub bitrate: String,
    #[serde(deserialize_with = "lenient")]
    pub connected: u64,
    pub genre: String,
    #[serde(rename = "ice-bitrate", deserialize_with = "lenient")]
    pub ice_bitrate: u64,
    #[serde(rename = "ice-channels", deserialize_with = "lenient")]
    pub ice_channels: u32,
    #[serde(rename = "ice-samplerate", deserialize_with = "lenient")]
    pub ice_samplerate: u32,
    #[serde(deserialize_with = "lenient")]
    pub incoming_bitrate: u64,
    #[serde(deserialize_with = "lenient")]
    pub listener_connections: u64,
    #[serde(deserialize_with = "lenient")]
    pub listener_peak: u64,
    #[serde(deserialize_with = "lenient")]
    pub listeners: u64,
    #[serde(rename = "listenurl")]
    pub listen_url: String,
    /// Either a number or the literal `unlimited`.
    pub max_listeners: String,
    pub metadata_updated: String,
    pub metadata_url: String,
    #[serde(deserialize_with = "lenient")]
    pub outgoing_kbitrate: u64,
    #[serde(deserialize_with = "lenient")]
    pub public: i64,
    #[serde(deserialize_with = "lenient")]
    pub queue_size: u64,
    pub server_description: String,
    pub server_name: String,
    pub server_type: String,
    pub server_url: String,
    #[serde(deserialize_with = "lenient")]
    pub slow_listeners: u64,
    pub source_ip: String,
    pub stream_start: String,
    pub subtype: String,
    #[serde(deserialize_with = "lenient")]
    pub total_bytes_read: u64,
    #[serde(deserialize_with = "lenient")]
    pub total_bytes_sent: u64,
    pub user_agent: String,
    pub yp_currently_playing: String,
}

// ── Mounts ───────────────────────────────────────────────────────────

/// Mount listing from `/admin/listmounts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMountList {
    #[serde(rename = "source")]
    pub source: Vec<WireMount>,
}

/// One `<source mount="...">` entry of the mount listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMount {
    #[serde(rename = "@mount")]
    pub mount: String,
    /// Older servers capitalize this element.
    #[serde(alias = "Listeners", deserialize_with = "lenient")]
    pub listeners: u64,
    #[serde(rename = "Connected", alias = "connected", deserialize_with = "lenient")]
    pub connected: u64,
    #[serde(rename = "content-type")]
    pub content_type: String,
}

// ── Listeners ────────────────────────────────────────────────────────

/// Listener listing from `/admin/listclients`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireClientList {
    #[serde(rename = "source")]
    pub source: Vec<WireClientSource>,
}

/// The `<source>` wrapper around the listeners of one mount.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireClientSource {
    #[serde(rename = "@mount")]
    pub mount: String,
    #[serde(rename = "listener")]
    pub listener: Vec<WireListener>,
}

/// A connected listener.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireListener {
    #[serde(rename = "ID", deserialize_with = "lenient")]
    pub id: u64,
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "UserAgent")]
    pub user_agent: String,
    #[serde(rename = "Referer")]
    pub referer: String,
    #[serde(deserialize_with = "lenient")]
    pub lag: u64,
    #[serde(rename = "Connected", deserialize_with = "lenient")]
    pub connected: u64,
}

impl WireClientList {
    /// All listeners across every `<source>` wrapper, in document order.
    pub fn into_listeners(self) -> Vec<WireListener> {
        self.source.into_iter().flat_map(|s| s.listener).collect()
    }
}

// ── Control response ─────────────────────────────────────────────────

/// Generic `<iceresponse>` returned by control endpoints.
/// `return == 1` means success.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireResponse {
    pub message: String,
    #[serde(rename = "return", deserialize_with = "lenient")]
    pub code: i64,
}

impl WireResponse {
    pub const SUCCESS: i64 = 1;

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }
}
