//! Media access integration tests
//!
//! Exercises the fetchers and the download layer end-to-end against a mock
//! service, asserting the wire format the real API speaks.

mod common;

use common::helpers::setup;
use pretty_assertions::assert_eq;
use rhombus_media_access::config::DownloadSettings;
use rhombus_media_access::{ConnectionType, Error, vod};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/api/org/generateFederatedSessionToken";
const MEDIA_URIS_PATH: &str = "/api/camera/getMediaUris";

async fn mount_token(server: &MockServer, duration_sec: u64, token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_json(json!({"durationSec": duration_sec})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"federatedSessionToken": token})),
        )
        .mount(server)
        .await;
}

async fn mount_media_uris(server: &MockServer, camera_uuid: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(MEDIA_URIS_PATH))
        .and(body_json(json!({"cameraUuid": camera_uuid})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn camera_media_uris() -> serde_json::Value {
    json!({
        "lanVodMpdUrisTemplates": [
            "https://lan.example/vod1.mpd",
            "https://lan.example/vod2.mpd"
        ],
        "wanVodMpdUriTemplate": "https://wan.example/vod.mpd",
        "lanLiveMpdUris": ["https://lan.example/live.mpd"],
        "wanLiveMpdUri": "https://wan.example/live.mpd"
    })
}

// ── Token fetcher ───────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_federated_token_requests_default_duration() {
    let (server, client) = setup().await;

    // The mock only matches a 1200 second request body
    mount_token(&server, 1200, "tok-abc").await;

    let token = vod::fetch_federated_token(&client).await.unwrap();
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn test_fetch_federated_token_repeated_calls_hit_the_service() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"federatedSessionToken": "tok"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    vod::fetch_federated_token(&client).await.unwrap();
    vod::fetch_federated_token(&client).await.unwrap();
}

#[tokio::test]
async fn test_fetch_federated_token_propagates_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad api key"))
        .mount(&server)
        .await;

    let result = vod::fetch_federated_token(&client).await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad api key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ── Media URI fetcher ───────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_media_uris_lan() {
    let (server, client) = setup().await;

    mount_media_uris(&server, "cam-1", camera_media_uris()).await;
    mount_token(&server, 600, "tok-abc").await;

    let (uri, token) = vod::fetch_media_uris(&client, "cam-1", 600, ConnectionType::Lan)
        .await
        .unwrap();

    assert_eq!(uri, "https://lan.example/vod1.mpd");
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn test_fetch_media_uris_wan() {
    let (server, client) = setup().await;

    mount_media_uris(&server, "cam-1", camera_media_uris()).await;
    mount_token(&server, 600, "tok-abc").await;

    let (uri, token) = vod::fetch_media_uris(&client, "cam-1", 600, ConnectionType::Wan)
        .await
        .unwrap();

    assert_eq!(uri, "https://wan.example/vod.mpd");
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn test_fetch_media_uris_no_lan_templates() {
    let (server, client) = setup().await;

    mount_media_uris(
        &server,
        "cam-1",
        json!({"wanVodMpdUriTemplate": "https://wan.example/vod.mpd"}),
    )
    .await;
    mount_token(&server, 600, "tok-abc").await;

    let result = vod::fetch_media_uris(&client, "cam-1", 600, ConnectionType::Lan).await;

    match result {
        Err(Error::NoLanUri { camera_uuid }) => assert_eq!(camera_uuid, "cam-1"),
        other => panic!("expected NoLanUri, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_media_uris_media_failure_skips_token_call() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(MEDIA_URIS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("lookup failed"))
        .mount(&server)
        .await;

    // The failed URI lookup must not spend a token round trip
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"federatedSessionToken": "tok"})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let result = vod::fetch_media_uris(&client, "cam-1", 600, ConnectionType::Lan).await;
    assert!(matches!(result, Err(Error::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_media_uris_token_failure_fails_operation() {
    let (server, client) = setup().await;

    mount_media_uris(&server, "cam-1", camera_media_uris()).await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let result = vod::fetch_media_uris(&client, "cam-1", 600, ConnectionType::Lan).await;
    assert!(matches!(result, Err(Error::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_live_uri_wan() {
    let (server, client) = setup().await;

    mount_media_uris(&server, "cam-1", camera_media_uris()).await;
    mount_token(&server, 3600, "tok-live").await;

    let (uri, token) = vod::fetch_live_uri(&client, "cam-1", 3600, ConnectionType::Wan)
        .await
        .unwrap();

    assert_eq!(uri, "https://wan.example/live.mpd");
    assert_eq!(token, "tok-live");
}

// ── VOD download ────────────────────────────────────────────────────

const CLIP_MPD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MPD xmlns="urn:mpeg:dash:schema:mpd:2011" type="static">
  <Period>
    <AdaptationSet mimeType="video/mp4">
      <SegmentTemplate initialization="seg_init.mp4" media="seg_$Number$.m4v" startNumber="1" duration="2"/>
    </AdaptationSet>
  </Period>
</MPD>"#;

async fn mount_media(server: &MockServer, url_path: &str, body: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(header("Cookie", format!("RSESSIONID=RFT:{token}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_download_alert_vod_assembles_segments() {
    let (server, client) = setup().await;
    let output_dir = tempfile::tempdir().unwrap();

    mount_media(&server, "/media/clip.mpd", CLIP_MPD, "tok-dl").await;
    mount_media(&server, "/media/seg_init.mp4", "INIT", "tok-dl").await;
    mount_media(&server, "/media/seg_1.m4v", "SEG1", "tok-dl").await;
    mount_media(&server, "/media/seg_2.m4v", "SEG2", "tok-dl").await;

    let settings = DownloadSettings {
        output_dir: output_dir.path().to_path_buf(),
        segment_seconds: 2,
    };
    let uri = format!("{}/media/clip.mpd", server.uri());

    let clip = vod::download_alert_vod(&client, &settings, &uri, "tok-dl", 4, "alert-1")
        .await
        .unwrap();

    assert_eq!(clip.dir, output_dir.path().join("alert-1"));
    assert_eq!(clip.path, clip.dir.join("clip.mp4"));
    assert_eq!(clip.start_time, None);

    let contents = std::fs::read_to_string(&clip.path).unwrap();
    assert_eq!(contents, "INITSEG1SEG2");
}

#[tokio::test]
async fn test_download_vod_expands_template() {
    let (server, client) = setup().await;
    let output_dir = tempfile::tempdir().unwrap();

    // {START_TIME} is computed from the clock, so match it structurally
    Mock::given(method("GET"))
        .and(path_regex(r"^/vod/\d+/8/clip\.mpd$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CLIP_MPD))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/vod/\d+/8/seg_init\.mp4$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("INIT"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/vod/\d+/8/seg_\d+\.m4v$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SEG"))
        .expect(4)
        .mount(&server)
        .await;

    let settings = DownloadSettings {
        output_dir: output_dir.path().to_path_buf(),
        segment_seconds: 2,
    };
    let template = format!("{}/vod/{{START_TIME}}/{{DURATION}}/clip.mpd", server.uri());

    let clip = vod::download_vod(&client, &settings, &template, "tok-dl", 8)
        .await
        .unwrap();

    assert!(clip.start_time.is_some());
    let contents = std::fs::read_to_string(&clip.path).unwrap();
    assert_eq!(contents, "INITSEGSEGSEGSEG");
}

#[tokio::test]
async fn test_download_aborts_on_failed_segment() {
    let (server, client) = setup().await;
    let output_dir = tempfile::tempdir().unwrap();

    mount_media(&server, "/media/clip.mpd", CLIP_MPD, "tok-dl").await;
    mount_media(&server, "/media/seg_init.mp4", "INIT", "tok-dl").await;
    Mock::given(method("GET"))
        .and(path("/media/seg_1.m4v"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let settings = DownloadSettings {
        output_dir: output_dir.path().to_path_buf(),
        segment_seconds: 2,
    };
    let uri = format!("{}/media/clip.mpd", server.uri());

    let result = vod::download_alert_vod(&client, &settings, &uri, "tok-dl", 4, "alert-2").await;
    assert!(matches!(
        result,
        Err(Error::MediaDownload { status: 401, .. })
    ));
}
