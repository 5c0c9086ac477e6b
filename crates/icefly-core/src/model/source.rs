// ── Source domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mounted source as seen in `/admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Audio parameters, resolved from whichever field set the server sent.
    pub audio: AudioInfo,
    /// Audio parameters from the `ice-*` fields only, untouched by fallbacks.
    pub legacy_audio: LegacyAudioInfo,
    pub info: SourceMetadataInfo,
    pub stats: SourceStatistics,
    pub track: TrackInfo,

    /// Bitrate label as sent by the source client, e.g. `"128"` or `"Quality 0"`.
    pub bitrate: String,
    pub genre: String,
    pub listen_url: String,
    pub metadata_updated: Option<DateTime<Utc>>,
    pub stream_started: Option<DateTime<Utc>>,
    /// Listed in public directories.
    pub public: bool,
    pub source_ip: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Bits per second.
    pub bitrate: u64,
    pub channels: u32,
    /// Hertz.
    pub sample_rate: u32,
    pub codec_id: u32,
    /// The raw `audio_info` string, e.g. `ice-samplerate=48000;ice-channels=2`.
    pub raw_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAudioInfo {
    /// Bits per second.
    pub bitrate: u64,
    pub channels: u32,
    pub sample_rate: u32,
}

/// Stream description supplied by the source client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadataInfo {
    pub name: String,
    pub description: String,
    /// Content type, e.g. `application/ogg`.
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
    pub subtype: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStatistics {
    /// Seconds since the source connected.
    pub connected: u64,
    pub incoming_bitrate: u64,
    /// Bits per second.
    pub outgoing_bitrate: u64,
    pub listener_connections: u64,
    pub listener_peak: u64,
    pub listeners: u64,
    /// `-1` means unlimited.
    pub max_listeners: i64,
    pub queue_size: u64,
    pub slow_listeners: u64,
    pub total_bytes_read: u64,
    pub total_bytes_sent: u64,
}

impl SourceStatistics {
    /// Sentinel value of [`max_listeners`](Self::max_listeners) for "no limit".
    pub const UNLIMITED: i64 = -1;

    /// The listener limit, or `None` if unlimited.
    pub fn listener_limit(&self) -> Option<u64> {
        u64::try_from(self.max_listeners).ok()
    }
}

/// The track currently playing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub artist: String,
    pub title: String,
    pub artwork: String,
    pub metadata_url: String,
    /// Combined `artist - title` string as published to directories.
    pub raw_info: String,
}
