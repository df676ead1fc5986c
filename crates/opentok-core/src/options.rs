//! # Structured Request Options
//!
//! Option blobs for the force-mute and audio-connector (websocket) calls.
//! Both arrive as untyped JSON; [`ForceMuteOptions::from_value`] and
//! [`WebsocketOptions::from_value`] perform the discriminant checks and
//! produce typed values that serialize back into the wire shape.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;
use crate::value::{kind_of, require_array, require_bool, require_key, require_mapping, require_str};

/// Decode a sequence of stream identifiers, reporting the first bad element.
///
/// Elements are carried through as opaque strings; only the JSON type is
/// checked.
fn stream_list(param: &'static str, value: &Value) -> Result<Vec<String>, ValidationError> {
    require_array(param, value)?
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationError::invalid(
                param,
                format!("element {i}: expected string, got {}", kind_of(other)),
            )),
        })
        .collect()
}

/// Options for muting every stream in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceMuteOptions {
    /// Streams left unmuted.
    pub excluded_streams: Vec<String>,
    /// `true` keeps streams published later muted as well.
    pub active: bool,
}

impl ForceMuteOptions {
    /// Decode force-mute options from untyped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if the value is not a
    /// mapping, `excludedStreams` is missing, not a sequence, or contains a
    /// non-string, or `active` is missing or not a boolean.
    pub fn from_value(options: &Value) -> Result<Self, ValidationError> {
        let map = require_mapping("options", options)?;
        let excluded_streams = stream_list(
            "excludedStreams",
            require_key(map, "excludedStreams")?,
        )?;
        let active = require_bool("active", require_key(map, "active")?)?;
        Ok(Self {
            excluded_streams,
            active,
        })
    }
}

/// Validate untyped force-mute options. See [`ForceMuteOptions::from_value`].
pub fn validate_force_mute_all_options(options: &Value) -> Result<(), ValidationError> {
    ForceMuteOptions::from_value(options).map(|_| ())
}

/// Sample rate of audio sent over the websocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioRate {
    /// 8 kHz.
    Narrowband,
    /// 16 kHz.
    Wideband,
}

impl AudioRate {
    /// The rate in Hz.
    pub fn hz(&self) -> u32 {
        match self {
            Self::Narrowband => 8000,
            Self::Wideband => 16000,
        }
    }

    /// Map a rate in Hz to a supported variant.
    pub fn from_hz(hz: u64) -> Result<Self, ValidationError> {
        match hz {
            8000 => Ok(Self::Narrowband),
            16000 => Ok(Self::Wideband),
            other => Err(ValidationError::invalid(
                "audioRate",
                format!("{other} Hz is not supported; use 8000 or 16000"),
            )),
        }
    }
}

impl Serialize for AudioRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.hz())
    }
}

/// Options for connecting session audio to a websocket endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsocketOptions {
    /// Websocket endpoint that receives the audio.
    pub uri: String,
    /// Streams to include. All streams when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streams: Option<Vec<String>>,
    /// Extra headers sent on the websocket handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Sample rate of the forwarded audio. Platform default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_rate: Option<AudioRate>,
}

impl WebsocketOptions {
    /// Decode websocket options from untyped JSON.
    ///
    /// Only `uri` is required. Optional keys are checked when present.
    pub fn from_value(options: &Value) -> Result<Self, ValidationError> {
        let map = require_mapping("websocket", options)?;

        let uri = require_str("uri", require_key(map, "uri")?)?;
        if uri.is_empty() {
            return Err(ValidationError::invalid("uri", "must be non-empty"));
        }

        let streams = map
            .get("streams")
            .map(|v| stream_list("streams", v))
            .transpose()?;

        let headers = map
            .get("headers")
            .map(|v| -> Result<BTreeMap<String, String>, ValidationError> {
                require_mapping("headers", v)?
                    .iter()
                    .map(|(name, value)| -> Result<(String, String), ValidationError> {
                        let value = value.as_str().ok_or_else(|| {
                            ValidationError::invalid(
                                "headers",
                                format!("header \"{name}\": expected string, got {}", kind_of(value)),
                            )
                        })?;
                        Ok((name.clone(), value.to_string()))
                    })
                    .collect()
            })
            .transpose()?;

        let audio_rate = map
            .get("audioRate")
            .map(|v| match v.as_u64() {
                Some(hz) => AudioRate::from_hz(hz),
                None => Err(ValidationError::invalid(
                    "audioRate",
                    format!("expected integer, got {}", kind_of(v)),
                )),
            })
            .transpose()?;

        Ok(Self {
            uri: uri.to_string(),
            streams,
            headers,
            audio_rate,
        })
    }
}

/// Validate untyped websocket options. See [`WebsocketOptions::from_value`].
pub fn validate_websocket_options(options: &Value) -> Result<(), ValidationError> {
    WebsocketOptions::from_value(options).map(|_| ())
}
