//! Property tests for the universally quantified validator rules.

use opentok_core::{
    validate_api_key, validate_api_secret, validate_force_mute_all_options, validate_resolution,
    validate_websocket_options, ResolutionSet,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Any JSON value that is not a string.
fn non_string_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| json!(f)),
        prop::collection::vec("[a-z0-9]{0,8}", 0..4).prop_map(|v| json!(v)),
        prop::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..4).prop_map(|m| json!(m)),
    ]
}

proptest! {
    /// Every integer is an acceptable API key.
    #[test]
    fn api_key_accepts_all_integers(n in any::<i64>()) {
        prop_assert!(validate_api_key(&json!(n)).is_ok());
    }

    /// Every non-empty digit string is an acceptable API key.
    #[test]
    fn api_key_accepts_digit_strings(s in "[0-9]{1,20}") {
        prop_assert!(validate_api_key(&json!(s)).is_ok());
    }

    /// A string with any non-digit character is rejected.
    #[test]
    fn api_key_rejects_non_digit_strings(prefix in "[0-9]{0,5}", bad in "[^0-9]", suffix in "[0-9]{0,5}") {
        let key = format!("{prefix}{bad}{suffix}");
        prop_assert!(validate_api_key(&json!(key)).is_err());
    }

    /// Lists of anything are rejected as API keys.
    #[test]
    fn api_key_rejects_lists(items in prop::collection::vec(any::<i64>(), 0..4)) {
        prop_assert!(validate_api_key(&json!(items)).is_err());
    }

    /// Every string is an acceptable API secret.
    #[test]
    fn api_secret_accepts_all_strings(s in any::<String>()) {
        prop_assert!(validate_api_secret(&json!(s)).is_ok());
    }

    /// Nothing but a string is an acceptable API secret.
    #[test]
    fn api_secret_rejects_non_strings(v in non_string_value()) {
        prop_assert!(validate_api_secret(&v).is_err());
    }

    /// A resolution passes iff it is in the default allow-list, whatever
    /// the separator case.
    #[test]
    fn resolution_matches_allow_list(w in 1u32..4000, h in 1u32..4000, upper in any::<bool>()) {
        let sep = if upper { 'X' } else { 'x' };
        let value = format!("{w}{sep}{h}");
        let allowed = ResolutionSet::default()
            .iter()
            .any(|r| r.width() == w && r.height() == h);
        prop_assert_eq!(validate_resolution(&value).is_ok(), allowed);
    }

    /// Any sequence of strings is acceptable as `excludedStreams`.
    #[test]
    fn force_mute_accepts_any_string_sequence(
        streams in prop::collection::vec(any::<String>(), 0..6),
        active in any::<bool>(),
    ) {
        let options = json!({"excludedStreams": streams, "active": active});
        prop_assert!(validate_force_mute_all_options(&options).is_ok());
    }

    /// Any sequence of strings is acceptable as websocket `streams`.
    #[test]
    fn websocket_accepts_any_string_sequence(streams in prop::collection::vec(any::<String>(), 0..6)) {
        let options = json!({"uri": "ws://valid-websocket", "streams": streams});
        prop_assert!(validate_websocket_options(&options).is_ok());
    }
}
