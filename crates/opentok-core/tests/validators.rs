//! # Validator Contract Tests
//!
//! Exercises each public validator through the crate root the way the
//! client layer calls it: untyped JSON in, `Ok(())` or
//! `InvalidArgument` out.

use opentok_core::{
    is_assoc, validate_api_key, validate_api_secret, validate_api_url,
    validate_force_mute_all_options, validate_resolution, validate_websocket_options,
    ValidationError,
};
use serde_json::json;

fn assert_invalid(result: Result<(), ValidationError>) {
    match result {
        Err(ValidationError::InvalidArgument { .. }) => {}
        Ok(()) => panic!("expected InvalidArgument, got Ok"),
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[test]
fn validates_string_api_key() {
    validate_api_key(&json!("47347801")).unwrap();
}

#[test]
fn validates_integer_api_key() {
    validate_api_key(&json!(47347801)).unwrap();
}

#[test]
fn rejects_list_api_key() {
    assert_invalid(validate_api_key(&json!([47347801])));
}

#[test]
fn validates_api_secret() {
    validate_api_secret(&json!("cdff574f0b071230be098e279d16931116c43fcf")).unwrap();
}

#[test]
fn rejects_numeric_api_secret() {
    assert_invalid(validate_api_secret(&json!(3252556)));
}

#[test]
fn validates_api_url() {
    validate_api_url("https://api.opentok.com").unwrap();
}

#[test]
fn rejects_email_as_api_url() {
    assert_invalid(validate_api_url("dave@opentok.com"));
}

// ---------------------------------------------------------------------------
// Force mute
// ---------------------------------------------------------------------------

#[test]
fn accepts_correct_force_mute_payload() {
    let options = json!({
        "excludedStreams": ["streamId1", "streamId2"],
        "active": true
    });
    validate_force_mute_all_options(&options).unwrap();
}

#[test]
fn rejects_non_string_stream_ids() {
    let options = json!({
        "excludedStreams": [3536, "streamId2"],
        "active": true
    });
    assert_invalid(validate_force_mute_all_options(&options));
}

#[test]
fn accepts_empty_and_spaced_stream_ids() {
    let options = json!({
        "excludedStreams": ["", "a b"],
        "active": false
    });
    validate_force_mute_all_options(&options).unwrap();
    validate_websocket_options(&json!({"uri": "ws://valid-websocket", "streams": ["", "a b"]}))
        .unwrap();
}

#[test]
fn rejects_non_bool_active() {
    let options = json!({
        "excludedStreams": ["streamId1", "streamId2"],
        "active": "true"
    });
    assert_invalid(validate_force_mute_all_options(&options));
}

#[test]
fn rejects_non_sequence_excluded_streams() {
    let options = json!({
        "excludedStreams": "streamIdOne",
        "active": false
    });
    assert_invalid(validate_force_mute_all_options(&options));
}

// ---------------------------------------------------------------------------
// Websocket
// ---------------------------------------------------------------------------

#[test]
fn validates_websocket_configuration() {
    let config = json!({
        "uri": "ws://valid-websocket",
        "streams": [
            "525503c7-913e-43a1-84b4-31b2e9fe668b",
            "14026813-4f50-4a5a-9b72-fea25430916d"
        ]
    });
    validate_websocket_options(&config).unwrap();
}

#[test]
fn validates_websocket_configuration_without_streams() {
    validate_websocket_options(&json!({"uri": "ws://valid-websocket"})).unwrap();
}

#[test]
fn rejects_websocket_configuration_without_uri() {
    let config = json!({
        "streams": [
            "525503c7-913e-43a1-84b4-31b2e9fe668b",
            "14026813-4f50-4a5a-9b72-fea25430916d"
        ]
    });
    assert_invalid(validate_websocket_options(&config));
}

// ---------------------------------------------------------------------------
// isAssoc
// ---------------------------------------------------------------------------

#[test]
fn is_assoc_with_mapping() {
    let haystack = json!({"one": "1", "two": "2", "three": "3", "four": "4"});
    assert!(is_assoc(&haystack));
}

#[test]
fn is_assoc_with_list() {
    let haystack = json!(["one", "two", "three", "four"]);
    assert!(!is_assoc(&haystack));
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn resolution_table() {
    let cases = [
        ("640x480", true),
        ("1280x720", true),
        ("1920x1080", true),
        ("480x640", true),
        ("720x1280", true),
        ("1080x1920", true),
        ("1080X1920", true),
        ("923x245", false),
    ];
    for (resolution, is_valid) in cases {
        let result = validate_resolution(resolution);
        assert_eq!(result.is_ok(), is_valid, "{resolution}: {result:?}");
        if !is_valid {
            assert_invalid(result);
        }
    }
}
