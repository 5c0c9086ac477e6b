#![allow(clippy::unwrap_used)]
// End-to-end tests for `Admin`: mock server in, domain model out.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use icefly_api::AdminClient;
use icefly_core::{Admin, AdminConfig, CoreError, TrackMetadataUpdate};

// ── Helpers ─────────────────────────────────────────────────────────

const STATS_XML: &str = include_str!("fixtures/stats.xml");
const LISTCLIENTS_XML: &str = include_str!("fixtures/listclients.xml");

async fn setup() -> (MockServer, Admin) {
    let server = MockServer::start().await;
    let client = AdminClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        "admin".into(),
        SecretString::from("hackme".to_string()),
    );
    (server, Admin::with_client(client, Duration::from_secs(30)))
}

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml")
        .set_body_string(body)
}

fn iceresponse(message: &str, code: u8) -> ResponseTemplate {
    xml(&format!(
        "<?xml version=\"1.0\"?>\n<iceresponse><message>{message}</message><return>{code}</return></iceresponse>"
    ))
}

async fn mount_stats(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(xml(body))
        .mount(server)
        .await;
}

// ── Stats ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stats_translates_server_fields() {
    let (server, admin) = setup().await;
    mount_stats(&server, STATS_XML).await;

    let snap = admin.stats().await.unwrap();

    assert_eq!(snap.admin, "icemaster@localhost");
    assert_eq!(snap.host, "radio.example.com");
    assert_eq!(snap.location, "Earth");
    assert_eq!(snap.info.id, "Icecast 2.4.4");
    assert_eq!(snap.info.build, 20_200_418);
    assert_eq!(snap.start.unwrap().timestamp(), 1_587_378_498);

    assert_eq!(snap.stats.outgoing_bitrate, 17_869_824);
    assert_eq!(snap.stats.stream_bytes_read, 259_204_096);
    assert_eq!(snap.stats.stream_bytes_sent, 341_397_504);
    assert_eq!(snap.stats.client_connections, 214);
    assert_eq!(snap.stats.listeners, 3);
    assert_eq!(snap.stats.sources, 2);

    assert_eq!(snap.mounts(), vec!["/live.ogg", "/radio.mp3"]);
}

#[tokio::test]
async fn test_stats_translates_primary_source() {
    let (server, admin) = setup().await;
    mount_stats(&server, STATS_XML).await;

    let snap = admin.stats().await.unwrap();
    let live = snap.source("live.ogg").unwrap();

    assert_eq!(live.audio.bitrate, 128_000);
    assert_eq!(live.audio.channels, 2);
    assert_eq!(live.audio.sample_rate, 44_100);
    assert_eq!(live.audio.codec_id, 10);
    assert_eq!(
        live.audio.raw_info,
        "ice-samplerate=44100;ice-bitrate=128;ice-channels=2"
    );
    assert_eq!(live.legacy_audio.bitrate, 128_000);
    assert_eq!(live.legacy_audio.channels, 2);
    assert_eq!(live.legacy_audio.sample_rate, 44_100);

    assert_eq!(live.info.name, "Example Live");
    assert_eq!(live.info.content_type, "application/ogg");
    assert_eq!(live.info.subtype, "Vorbis");

    assert_eq!(live.stats.max_listeners, -1);
    assert_eq!(live.stats.listener_limit(), None);
    assert_eq!(live.stats.outgoing_bitrate, 318_464);
    assert_eq!(live.stats.total_bytes_read, 311_565);
    assert_eq!(live.stats.listener_peak, 7);

    assert_eq!(live.track.artist, "Nico & Vinz");
    assert_eq!(live.track.title, "Am I Wrong");
    assert_eq!(live.track.raw_info, "Nico & Vinz - Am I Wrong");

    assert!(live.public);
    assert_eq!(live.source_ip, "192.0.2.10");
    assert_eq!(
        live.metadata_updated,
        Some(Utc.timestamp_opt(1_587_210_604, 0).unwrap())
    );
    assert_eq!(
        live.stream_started,
        Some(Utc.timestamp_opt(1_587_210_603, 0).unwrap())
    );
}

#[tokio::test]
async fn test_stats_backfills_mp3_source() {
    let (server, admin) = setup().await;
    mount_stats(&server, STATS_XML).await;

    let snap = admin.stats().await.unwrap();
    let mp3 = snap.source("/radio.mp3").unwrap();

    assert_eq!(mp3.audio.sample_rate, 44_100);
    assert_eq!(mp3.audio.channels, 2);
    assert_eq!(mp3.audio.bitrate, 128_000);
    assert_eq!(mp3.legacy_audio.bitrate, 0);
    assert_eq!(mp3.stats.max_listeners, 100);
    assert_eq!(mp3.stats.listener_limit(), Some(100));
    assert!(!mp3.public);
    assert_eq!(mp3.metadata_updated, None);
    assert_eq!(mp3.stream_started.unwrap().timestamp(), 1_587_116_898);
}

#[tokio::test]
async fn test_stats_without_sources() {
    let (server, admin) = setup().await;
    mount_stats(
        &server,
        "<icestats><admin>icemaster@localhost</admin><server_start>garbage</server_start></icestats>",
    )
    .await;

    let snap = admin.stats().await.unwrap();

    assert!(snap.sources.is_none());
    assert!(snap.start.is_none());
    assert!(snap.source("/live.ogg").is_none());
}

#[tokio::test]
async fn test_source_lookup() {
    let (server, admin) = setup().await;
    mount_stats(&server, STATS_XML).await;

    let live = admin.source("live.ogg").await.unwrap();
    assert_eq!(live.genre, "Pop");

    let err = admin.source("/missing.ogg").await.unwrap_err();
    assert!(
        matches!(err, CoreError::SourceNotFound { ref mount } if mount == "/missing.ogg"),
        "got {err:?}"
    );
}

// ── Listings ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_mounts() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/listmounts"))
        .respond_with(xml(
            r#"<icestats>
                <source mount="/live.ogg">
                    <listeners>2</listeners>
                    <Connected>3600</Connected>
                    <content-type>application/ogg</content-type>
                </source>
            </icestats>"#,
        ))
        .mount(&server)
        .await;

    let mounts = admin.list_mounts().await.unwrap();

    assert_eq!(mounts.len(), 1);
    assert_eq!(mounts[0].path, "/live.ogg");
    assert_eq!(mounts[0].listeners, 2);
    assert_eq!(mounts[0].connected, 3600);
    assert_eq!(mounts[0].content_type, "application/ogg");
}

#[tokio::test]
async fn test_list_clients() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/listclients"))
        .and(query_param("mount", "/live.ogg"))
        .respond_with(xml(LISTCLIENTS_XML))
        .mount(&server)
        .await;

    let listeners = admin.list_clients("/live.ogg").await.unwrap();

    assert_eq!(listeners.len(), 2);
    assert_eq!(listeners[0].id, 42);
    assert_eq!(listeners[0].ip, "198.51.100.7");
    assert_eq!(listeners[0].referer, "http://radio.example.com/player");
    assert_eq!(listeners[0].connected, 310);
    assert_eq!(listeners[1].id, 43);
    assert_eq!(listeners[1].lag, 4096);
    assert_eq!(listeners[1].referer, "");
}

// ── Control operations ──────────────────────────────────────────────

#[tokio::test]
async fn test_update_metadata_sends_encoded_fields() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/metadata"))
        .and(query_param("mode", "updinfo"))
        .and(query_param("mount", "/live.ogg"))
        .and(query_param("artist", "Nico & Vinz"))
        .and(query_param("title", "Am I Wrong"))
        .respond_with(iceresponse("Metadata update successful", 1))
        .expect(1)
        .mount(&server)
        .await;

    let meta = TrackMetadataUpdate::track("Nico & Vinz", "Am I Wrong");
    admin.update_metadata("/live.ogg", &meta).await.unwrap();
}

#[tokio::test]
async fn test_update_metadata_defaults_to_unknown_song() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/metadata"))
        .and(query_param("song", "Unknown"))
        .respond_with(iceresponse("Metadata update successful", 1))
        .expect(1)
        .mount(&server)
        .await;

    admin
        .update_metadata("/live.ogg", &TrackMetadataUpdate::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_control_operations_hit_their_endpoints() {
    let (server, admin) = setup().await;

    for (endpoint, key, value) in [
        ("/admin/fallback", "fallback", "/backup.ogg"),
        ("/admin/moveclients", "destination", "/backup.ogg"),
        ("/admin/killclient", "id", "42"),
        ("/admin/killsource", "mount", "/live.ogg"),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("mount", "/live.ogg"))
            .and(query_param(key, value))
            .respond_with(iceresponse("Done", 1))
            .expect(1)
            .mount(&server)
            .await;
    }

    admin.update_fallback("/live.ogg", "/backup.ogg").await.unwrap();
    admin.move_clients("/live.ogg", "/backup.ogg").await.unwrap();
    admin.kill_client("/live.ogg", 42).await.unwrap();
    admin.kill_source("/live.ogg").await.unwrap();
}

#[tokio::test]
async fn test_rejected_operation_surfaces_message() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/killsource"))
        .respond_with(iceresponse("Source does not exist", 0))
        .mount(&server)
        .await;

    let err = admin.kill_source("/missing.ogg").await.unwrap_err();
    match err {
        CoreError::Rejected { message } => assert_eq!(message, "Source does not exist"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let (server, admin) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = admin.stats().await.unwrap_err();
    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let (server, admin) = setup().await;
    mount_stats(&server, "<icestats><source mount=").await;

    let err = admin.stats().await.unwrap_err();
    assert!(matches!(err, CoreError::Decode { .. }), "got {err:?}");
}

#[test]
fn test_empty_credentials_fail_before_sending() {
    let url = Url::parse("http://127.0.0.1:8000").unwrap();

    let err = Admin::new(&AdminConfig::new(
        url.clone(),
        "",
        SecretString::from("hackme".to_string()),
    ))
    .unwrap_err();
    assert!(err.to_string().contains("Username is empty"), "got {err}");

    let err = Admin::new(&AdminConfig::new(url, "admin", SecretString::from(String::new())))
        .unwrap_err();
    assert!(err.to_string().contains("Password is empty"), "got {err}");
}

#[tokio::test]
async fn test_unreachable_server_maps_to_connection_failed() {
    let url = Url::parse("http://127.0.0.1:9").unwrap();
    let admin = Admin::new(&AdminConfig::new(
        url,
        "admin",
        SecretString::from("hackme".to_string()),
    ))
    .unwrap();

    let err = admin.stats().await.unwrap_err();
    assert!(matches!(err, CoreError::ConnectionFailed { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_slow_server_reports_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(xml(STATS_XML).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let client = AdminClient::with_client(
        http,
        Url::parse(&server.uri()).unwrap(),
        "admin".into(),
        SecretString::from("hackme".to_string()),
    );
    let admin = Admin::with_client(client, Duration::from_secs(1));

    let err = admin.stats().await.unwrap_err();
    assert!(
        matches!(err, CoreError::Timeout { timeout_secs: 1 }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("after 1s"), "got {err}");
}
