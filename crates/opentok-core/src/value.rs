//! # Dynamic Value Helpers
//!
//! Option blobs reach the SDK as `serde_json::Value` (parsed from a config
//! file, or built with `json!`). Before structured decoding, the blob is
//! classified here: is it a mapping, a list, or a scalar?
//!
//! [`is_assoc`] answers "does this behave as a key-value mapping?" in the
//! sense of the wire protocol: an object whose keys are exactly the decimal
//! indices `0..n` is a list in disguise, not a mapping. JSON object key
//! order carries no meaning, so the check is on the key *set*.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Returns `true` if `value` is a mapping rather than a positional list.
///
/// - Arrays and scalars are never mappings.
/// - An empty object is a mapping.
/// - A non-empty object is a mapping unless its keys are exactly
///   `"0"`, `"1"`, ..., `"n-1"`.
pub fn is_assoc(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            let len = map.len();
            map.is_empty() || !map.keys().all(|k| index_key(k).is_some_and(|i| i < len))
        }
        _ => false,
    }
}

/// Parse a canonical decimal index (no sign, no leading zeros).
fn index_key(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Name the JSON type of `value`, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn require_mapping<'a>(
    param: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    match value {
        Value::Object(map) if is_assoc(value) => Ok(map),
        Value::Object(_) => Err(ValidationError::invalid(
            param,
            "expected a mapping, got an index-keyed list",
        )),
        other => Err(ValidationError::invalid(
            param,
            format!("expected a mapping, got {}", kind_of(other)),
        )),
    }
}

pub(crate) fn require_key<'a>(
    map: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, ValidationError> {
    map.get(key)
        .ok_or_else(|| ValidationError::invalid(key, "required option is missing"))
}

pub(crate) fn require_str<'a>(
    param: &'static str,
    value: &'a Value,
) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| {
        ValidationError::invalid(param, format!("expected string, got {}", kind_of(value)))
    })
}

pub(crate) fn require_bool(param: &'static str, value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or_else(|| {
        ValidationError::invalid(param, format!("expected boolean, got {}", kind_of(value)))
    })
}

pub(crate) fn require_array<'a>(
    param: &'static str,
    value: &'a Value,
) -> Result<&'a [Value], ValidationError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ValidationError::invalid(
            param,
            format!("expected a sequence, got {}", kind_of(other)),
        )),
    }
}
