//! Tests for the OpenTok request builders.
//!
//! Each builder is driven through the public `OpenTok` facade and checked
//! for the described method, URL, and body, plus rejection of bad caller
//! arguments before anything is described.

use opentok_client::{ApiRequest, Method, OpenTok, OpenTokConfig, OpenTokError};
use opentok_core::{
    ApiKey, ApiSecret, ArchiveOptions, Layout, LayoutType, OutputMode, Resolution, ResolutionSet,
};
use serde_json::json;

const SESSION: &str = "1_MX40NzM0NzgwMX5-MTcwMDAwMDAwMH5-fg";
const ARCHIVE: &str = "b40ef09b-3811-4726-b508-e41a0f96c68f";

fn test_config() -> OpenTokConfig {
    OpenTokConfig::new(ApiKey::new("47347801").unwrap(), ApiSecret::new("test-secret"))
        .unwrap()
        .with_api_url("http://127.0.0.1:19000")
        .unwrap()
}

fn test_client() -> OpenTok {
    OpenTok::new(test_config())
}

fn project_url(path: &str) -> String {
    format!("http://127.0.0.1:19000/v2/project/47347801/{path}")
}

fn assert_rejected(result: Result<ApiRequest, OpenTokError>, param: &str) {
    match result {
        Err(OpenTokError::InvalidArgument(err)) => assert_eq!(err.param(), param, "{err}"),
        other => panic!("expected InvalidArgument for {param}, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Force mute
// ---------------------------------------------------------------------------

#[test]
fn force_mute_all_describes_post_with_options() {
    let req = test_client()
        .sessions()
        .force_mute_all(
            SESSION,
            &json!({"excludedStreams": ["streamId1", "streamId2"], "active": true}),
        )
        .unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url.as_str(), project_url(&format!("session/{SESSION}/mute")));
    assert_eq!(
        req.body,
        Some(json!({"excludedStreams": ["streamId1", "streamId2"], "active": true}))
    );
}

#[test]
fn force_mute_all_rejects_bad_options() {
    let sessions = test_client();
    let sessions = sessions.sessions();
    assert_rejected(
        sessions.force_mute_all(SESSION, &json!({"excludedStreams": ["s1"], "active": "true"})),
        "active",
    );
    assert_rejected(
        sessions.force_mute_all(SESSION, &json!({"excludedStreams": [3536], "active": true})),
        "excludedStreams",
    );
    assert_rejected(
        sessions.force_mute_all("", &json!({"excludedStreams": [], "active": true})),
        "sessionId",
    );
}

#[test]
fn force_mute_stream_has_no_body() {
    let req = test_client()
        .sessions()
        .force_mute_stream(SESSION, "streamId1")
        .unwrap();
    assert_eq!(
        req.url.as_str(),
        project_url(&format!("session/{SESSION}/stream/streamId1/mute"))
    );
    assert!(req.body.is_none());
}

// ---------------------------------------------------------------------------
// Audio connector
// ---------------------------------------------------------------------------

#[test]
fn connect_audio_wraps_websocket_options() {
    let req = test_client()
        .sessions()
        .connect_audio(
            SESSION,
            "T1==token",
            &json!({
                "uri": "ws://valid-websocket",
                "streams": ["525503c7-913e-43a1-84b4-31b2e9fe668b"]
            }),
        )
        .unwrap();
    assert_eq!(req.url.as_str(), project_url("connect"));
    assert_eq!(
        req.body,
        Some(json!({
            "sessionId": SESSION,
            "token": "T1==token",
            "websocket": {
                "uri": "ws://valid-websocket",
                "streams": ["525503c7-913e-43a1-84b4-31b2e9fe668b"]
            }
        }))
    );
}

#[test]
fn connect_audio_requires_uri_and_token() {
    let client = test_client();
    assert_rejected(
        client
            .sessions()
            .connect_audio(SESSION, "T1==token", &json!({"streams": []})),
        "uri",
    );
    let result = client
        .sessions()
        .connect_audio(SESSION, "", &json!({"uri": "ws://x"}));
    assert!(matches!(result, Err(OpenTokError::MissingToken)));
}

// ---------------------------------------------------------------------------
// DTMF
// ---------------------------------------------------------------------------

#[test]
fn play_dtmf_to_session_and_connection() {
    let client = test_client();
    let all = client.sessions().play_dtmf(SESSION, None, "1713#").unwrap();
    assert_eq!(all.url.as_str(), project_url(&format!("session/{SESSION}/play-dtmf")));
    assert_eq!(all.body, Some(json!({"digits": "1713#"})));

    let one = client
        .sessions()
        .play_dtmf(SESSION, Some("conn-1"), "p9")
        .unwrap();
    assert_eq!(
        one.url.as_str(),
        project_url(&format!("session/{SESSION}/connection/conn-1/play-dtmf"))
    );
}

#[test]
fn play_dtmf_rejects_bad_digits_and_connection() {
    let client = test_client();
    assert_rejected(client.sessions().play_dtmf(SESSION, None, "12a"), "digits");
    assert_rejected(client.sessions().play_dtmf(SESSION, Some(""), "1"), "connectionId");
}

// ---------------------------------------------------------------------------
// Archives
// ---------------------------------------------------------------------------

#[test]
fn start_archive_flattens_options() {
    let options = ArchiveOptions {
        name: Some("lesson".into()),
        resolution: Some("1280X720".parse().unwrap()),
        layout: Some(Layout::predefined(LayoutType::Pip).unwrap()),
        ..ArchiveOptions::default()
    };
    let req = test_client().archives().start(SESSION, &options).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url.as_str(), project_url("archive"));
    assert_eq!(
        req.body,
        Some(json!({
            "sessionId": SESSION,
            "name": "lesson",
            "hasAudio": true,
            "hasVideo": true,
            "outputMode": "composed",
            "resolution": "1280x720",
            "layout": {"type": "pip"},
            "streamMode": "auto"
        }))
    );
}

#[test]
fn start_archive_rejects_unsupported_resolution() {
    let options = ArchiveOptions {
        resolution: Some(Resolution::new(923, 245).unwrap()),
        ..ArchiveOptions::default()
    };
    assert_rejected(test_client().archives().start(SESSION, &options), "resolution");
}

#[test]
fn start_archive_honours_custom_resolution_set() {
    let qhd = Resolution::new(2560, 1440).unwrap();
    let client = OpenTok::with_resolutions(
        test_config(),
        ResolutionSet::default().with_both_orientations(qhd),
    );
    let options = ArchiveOptions {
        resolution: Some(qhd),
        ..ArchiveOptions::default()
    };
    assert!(client.archives().start(SESSION, &options).is_ok());
    assert!(client.archives().resolutions().contains(&qhd.rotated()));
}

#[test]
fn start_archive_rejects_resolution_for_individual_output() {
    let options = ArchiveOptions {
        output_mode: OutputMode::Individual,
        resolution: Some(Resolution::HD_LANDSCAPE),
        ..ArchiveOptions::default()
    };
    assert_rejected(test_client().archives().start(SESSION, &options), "resolution");
}

#[test]
fn stop_and_delete_require_uuid() {
    let client = test_client();
    let stop = client.archives().stop(ARCHIVE).unwrap();
    assert_eq!(stop.url.as_str(), project_url(&format!("archive/{ARCHIVE}/stop")));
    let delete = client.archives().delete(ARCHIVE).unwrap();
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.url.as_str(), project_url(&format!("archive/{ARCHIVE}")));
    assert_rejected(client.archives().stop("archive-1"), "archiveId");
}

#[test]
fn list_archives_builds_query() {
    let client = test_client();
    let req = client.archives().list(0, Some(50), Some(SESSION)).unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(
        req.url.as_str(),
        format!("{}?offset=0&count=50&sessionId={SESSION}", project_url("archive"))
    );
    let bare = client.archives().list(10, None, None).unwrap();
    assert_eq!(bare.url.query(), Some("offset=10"));
    assert_rejected(client.archives().list(-1, None, None), "offset");
    assert_rejected(client.archives().list(0, Some(1001), None), "count");
}

#[test]
fn requests_carry_configured_timeout() {
    let config = test_config().with_timeout_secs(7).unwrap();
    let req = OpenTok::new(config).archives().list(0, None, None).unwrap();
    assert_eq!(req.timeout, std::time::Duration::from_secs(7));
}
