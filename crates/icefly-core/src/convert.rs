// ── Wire-to-domain conversions ──
//
// Bridges raw `icefly_api` wire types into the canonical
// `icefly_core::model` types. Conversions never fail: unparseable numbers
// and timestamps degrade to zero / `None`, matching the forgiving way the
// server itself formats these documents.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use icefly_api::models::{WireListener, WireMount, WireSource, WireStats};

use crate::model::{
    AudioInfo, LegacyAudioInfo, Listener, Mount, ServerInfo, ServerSnapshot, ServerStatistics,
    SourceMetadataInfo, SourceSnapshot, SourceStatistics, TrackInfo,
};

/// Access-log style timestamp used throughout the stats document,
/// e.g. `2/Jan/2006:15:04:05 -0700`.
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Wire value of `max_listeners` meaning "no limit".
const UNLIMITED: &str = "unlimited";

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a `max_listeners` value: `"unlimited"` is `-1`, anything else
/// non-numeric is `0`.
pub fn parse_max_listeners(raw: &str) -> i64 {
    if raw == UNLIMITED {
        return SourceStatistics::UNLIMITED;
    }
    raw.parse().unwrap_or(0)
}

/// Parse a stats timestamp, returning `None` for empty or malformed input.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Scale a kilobit / kilobyte counter to base units (binary kilo).
pub fn kilo(value: u64) -> u64 {
    value.saturating_mul(1024)
}

/// `true` if the label consists of ASCII digits only.
pub fn is_numeric_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
}

/// Derive a bitrate in bits per second from a numeric bitrate label.
///
/// Small values are taken as kbps: source clients commonly report `128`
/// where they mean 128000.
fn bitrate_from_label(label: &str) -> Option<u64> {
    if !is_numeric_label(label) {
        return None;
    }
    let value: u64 = label.parse().unwrap_or(0);
    if (1..1024).contains(&value) {
        Some(value * 1000)
    } else {
        Some(value)
    }
}

// ── Server ─────────────────────────────────────────────────────────

impl From<WireStats> for ServerSnapshot {
    fn from(s: WireStats) -> Self {
        // No <source> elements leaves the collection unset rather than empty.
        let sources = if s.source.is_empty() {
            None
        } else {
            Some(
                s.source
                    .into_iter()
                    .map(|src| (src.mount.clone(), SourceSnapshot::from(src)))
                    .collect::<HashMap<_, _>>(),
            )
        };

        ServerSnapshot {
            admin: s.admin,
            host: s.host,
            location: s.location,
            start: parse_timestamp(&s.server_start),
            info: ServerInfo {
                id: s.server_id,
                build: s.build,
            },
            stats: ServerStatistics {
                banned_ips: s.banned_ips,
                client_connections: s.client_connections,
                clients: s.clients,
                connections: s.connections,
                file_connections: s.file_connections,
                listener_connections: s.listener_connections,
                listeners: s.listeners,
                outgoing_bitrate: kilo(s.outgoing_kbitrate),
                source_client_connections: s.source_client_connections,
                source_relay_connections: s.source_relay_connections,
                source_total_connections: s.source_total_connections,
                sources: s.sources,
                stats: s.stats,
                stats_connections: s.stats_connections,
                stream_bytes_read: kilo(s.stream_kbytes_read),
                stream_bytes_sent: kilo(s.stream_kbytes_sent),
            },
            sources,
        }
    }
}

// ── Source ─────────────────────────────────────────────────────────

/// Fill gaps in the primary audio info from the other field sets.
///
/// Only fields the server left at zero are touched: sample rate and
/// channels come from the `mpeg_*` fields, bitrate from the label.
fn apply_audio_fallbacks(audio: &mut AudioInfo, s: &WireSource) {
    if audio.sample_rate == 0 && s.mpeg_samplerate != 0 {
        audio.sample_rate = s.mpeg_samplerate;
    }
    if audio.channels == 0 && s.mpeg_channels != 0 {
        audio.channels = s.mpeg_channels;
    }
    if audio.bitrate == 0 {
        if let Some(bitrate) = bitrate_from_label(&s.bitrate) {
            audio.bitrate = bitrate;
        }
    }
}

impl From<WireSource> for SourceSnapshot {
    fn from(s: WireSource) -> Self {
        let mut audio = AudioInfo {
            bitrate: s.audio_bitrate,
            channels: s.audio_channels,
            sample_rate: s.audio_samplerate,
            codec_id: s.audio_codec_id,
            raw_info: s.audio_info.clone(),
        };

        // ice-bitrate is reported in decimal kbps.
        let legacy_audio = LegacyAudioInfo {
            bitrate: s.ice_bitrate.saturating_mul(1000),
            channels: s.ice_channels,
            sample_rate: s.ice_samplerate,
        };

        apply_audio_fallbacks(&mut audio, &s);

        SourceSnapshot {
            audio,
            legacy_audio,
            info: SourceMetadataInfo {
                name: s.server_name,
                description: s.server_description,
                content_type: s.server_type,
                url: s.server_url,
                subtype: s.subtype,
            },
            stats: SourceStatistics {
                connected: s.connected,
                incoming_bitrate: s.incoming_bitrate,
                outgoing_bitrate: kilo(s.outgoing_kbitrate),
                listener_connections: s.listener_connections,
                listener_peak: s.listener_peak,
                listeners: s.listeners,
                max_listeners: parse_max_listeners(&s.max_listeners),
                queue_size: s.queue_size,
                slow_listeners: s.slow_listeners,
                total_bytes_read: s.total_bytes_read,
                total_bytes_sent: s.total_bytes_sent,
            },
            track: TrackInfo {
                artist: s.artist,
                title: s.title,
                artwork: s.artwork,
                metadata_url: s.metadata_url,
                raw_info: s.yp_currently_playing,
            },
            bitrate: s.bitrate,
            genre: s.genre,
            listen_url: s.listen_url,
            metadata_updated: parse_timestamp(&s.metadata_updated),
            stream_started: parse_timestamp(&s.stream_start),
            public: s.public == 1,
            source_ip: s.source_ip,
            user_agent: s.user_agent,
        }
    }
}

// ── Mounts & listeners ─────────────────────────────────────────────

impl From<WireMount> for Mount {
    fn from(m: WireMount) -> Self {
        Mount {
            path: m.mount,
            listeners: m.listeners,
            connected: m.connected,
            content_type: m.content_type,
        }
    }
}

impl From<WireListener> for Listener {
    fn from(l: WireListener) -> Self {
        Listener {
            id: l.id,
            ip: l.ip,
            user_agent: l.user_agent,
            referer: l.referer,
            lag: l.lag,
            connected: l.connected,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn wire_source(mount: &str) -> WireSource {
        WireSource {
            mount: mount.into(),
            ..Default::default()
        }
    }

    #[test]
    fn max_listeners_sentinel() {
        assert_eq!(parse_max_listeners("unlimited"), -1);
        assert_eq!(parse_max_listeners("1000"), 1000);
        assert_eq!(parse_max_listeners(""), 0);
        assert_eq!(parse_max_listeners("lots"), 0);
        assert_eq!(parse_max_listeners(" 100"), 0);
        assert_eq!(parse_max_listeners("100 "), 0);
    }

    #[test]
    fn timestamp_parsing() {
        let ts = parse_timestamp("20/Apr/2020:10:28:18 +0000").map(|t| t.timestamp());
        assert_eq!(ts, Some(1_587_378_498));

        let ts = parse_timestamp("2/Jan/2006:15:04:05 -0700").map(|t| t.timestamp());
        assert_eq!(ts, Some(1_136_239_445));

        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2020-04-20T10:28:18Z"), None);
    }

    #[test]
    fn kilo_is_binary() {
        assert_eq!(kilo(0), 0);
        assert_eq!(kilo(17_451), 17_869_824);
        assert_eq!(kilo(1), 1024);
    }

    #[test]
    fn server_counters_scaled_and_start_parsed() {
        let wire = WireStats {
            outgoing_kbitrate: 17_451,
            stream_kbytes_read: 253_129,
            stream_kbytes_sent: 333_396,
            server_start: "20/Apr/2020:10:28:18 +0000".into(),
            ..Default::default()
        };
        let snap = ServerSnapshot::from(wire);

        assert_eq!(snap.stats.outgoing_bitrate, 17_869_824);
        assert_eq!(snap.stats.stream_bytes_read, 259_204_096);
        assert_eq!(snap.stats.stream_bytes_sent, 341_397_504);
        assert_eq!(snap.start.map(|t| t.timestamp()), Some(1_587_378_498));
    }

    #[test]
    fn sources_keyed_by_wire_mount() {
        let wire = WireStats {
            source: vec![wire_source("/a.ogg"), wire_source("b.mp3")],
            ..Default::default()
        };
        let snap = ServerSnapshot::from(wire);
        let sources = snap.sources.as_ref().expect("sources present");

        assert_eq!(sources.len(), 2);
        assert!(sources.contains_key("/a.ogg"));
        assert!(sources.contains_key("b.mp3"));
    }

    #[test]
    fn no_source_elements_leaves_sources_unset() {
        let snap = ServerSnapshot::from(WireStats::default());
        assert_eq!(snap.sources, None);
    }

    #[test]
    fn malformed_timestamp_does_not_abort_translation() {
        let wire = WireSource {
            stream_start: "not a date".into(),
            metadata_updated: "18/Apr/2020:14:50:04 +0300".into(),
            genre: "Various".into(),
            ..wire_source("/a.ogg")
        };
        let src = SourceSnapshot::from(wire);

        assert_eq!(src.stream_started, None);
        assert_eq!(src.metadata_updated.map(|t| t.timestamp()), Some(1_587_210_604));
        assert_eq!(src.genre, "Various");
    }

    #[test]
    fn mpeg_fields_backfill_audio() {
        let wire = WireSource {
            mpeg_samplerate: 44_100,
            mpeg_channels: 2,
            ..wire_source("/a.mp3")
        };
        let src = SourceSnapshot::from(wire);

        assert_eq!(src.audio.sample_rate, 44_100);
        assert_eq!(src.audio.channels, 2);
    }

    #[test]
    fn mpeg_fields_do_not_override_primary() {
        let wire = WireSource {
            audio_samplerate: 48_000,
            audio_channels: 1,
            mpeg_samplerate: 44_100,
            mpeg_channels: 2,
            ..wire_source("/a.mp3")
        };
        let src = SourceSnapshot::from(wire);

        assert_eq!(src.audio.sample_rate, 48_000);
        assert_eq!(src.audio.channels, 1);
    }

    #[test]
    fn bitrate_label_backfill() {
        let src = SourceSnapshot::from(WireSource {
            bitrate: "128".into(),
            ..wire_source("/a.mp3")
        });
        assert_eq!(src.audio.bitrate, 128_000);

        let src = SourceSnapshot::from(WireSource {
            bitrate: "128000".into(),
            ..wire_source("/a.mp3")
        });
        assert_eq!(src.audio.bitrate, 128_000);

        let src = SourceSnapshot::from(WireSource {
            bitrate: "Quality 0".into(),
            ..wire_source("/a.ogg")
        });
        assert_eq!(src.audio.bitrate, 0);
        assert_eq!(src.bitrate, "Quality 0");

        let src = SourceSnapshot::from(WireSource {
            audio_bitrate: 320_000,
            bitrate: "128".into(),
            ..wire_source("/a.ogg")
        });
        assert_eq!(src.audio.bitrate, 320_000);
    }

    #[test]
    fn legacy_audio_uses_decimal_kilo() {
        let src = SourceSnapshot::from(WireSource {
            ice_bitrate: 320,
            ice_channels: 2,
            ice_samplerate: 48_000,
            outgoing_kbitrate: 311_565,
            ..wire_source("/a.ogg")
        });

        assert_eq!(src.legacy_audio.bitrate, 320_000);
        assert_eq!(src.legacy_audio.channels, 2);
        assert_eq!(src.legacy_audio.sample_rate, 48_000);
        assert_eq!(src.stats.outgoing_bitrate, 319_042_560);
    }

    #[test]
    fn public_only_when_exactly_one() {
        for (raw, expected) in [(1, true), (0, false), (2, false), (-1, false)] {
            let src = SourceSnapshot::from(WireSource {
                public: raw,
                ..wire_source("/a.ogg")
            });
            assert_eq!(src.public, expected, "public={raw}");
        }
    }

    #[test]
    fn mount_and_listener_conversion() {
        let mount = Mount::from(WireMount {
            mount: "/source1.ogg".into(),
            listeners: 48,
            connected: 879,
            content_type: "application/ogg".into(),
        });
        assert_eq!(mount.path, "/source1.ogg");
        assert_eq!(mount.listeners, 48);

        let listener = Listener::from(WireListener {
            id: 757,
            ip: "192.168.1.22".into(),
            connected: 419,
            ..Default::default()
        });
        assert_eq!(listener.id, 757);
        assert_eq!(listener.ip, "192.168.1.22");
        assert_eq!(listener.connected, 419);
    }
}
