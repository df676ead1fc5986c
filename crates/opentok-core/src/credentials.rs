//! # Client Credentials and Connection Settings
//!
//! The project API key, the API secret, and the base URL of the REST
//! service. These are the first arguments an SDK user supplies and the
//! first ones checked.
//!
//! ## API Key
//!
//! The platform issues numeric project keys. Callers may hold them as an
//! integer or as a string of digits; both are accepted and stored in
//! canonical decimal string form. Every other shape is rejected.
//!
//! ## API Secret
//!
//! Any string is accepted. The secret is held in [`Zeroizing`] storage and
//! never printed by `Debug`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::error::ValidationError;
use crate::value::kind_of;

/// The two accepted shapes of an API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyInput {
    /// An integer key, e.g. `47347801`.
    Integer(i64),
    /// A key held as text. Must consist of ASCII digits only.
    DigitString(String),
}

impl From<i64> for ApiKeyInput {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for ApiKeyInput {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<String> for ApiKeyInput {
    fn from(s: String) -> Self {
        Self::DigitString(s)
    }
}

impl From<&str> for ApiKeyInput {
    fn from(s: &str) -> Self {
        Self::DigitString(s.to_string())
    }
}

/// A validated project API key, in decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create an API key from an integer or a digit string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if a string input is
    /// empty or contains anything other than ASCII digits.
    pub fn new(input: impl Into<ApiKeyInput>) -> Result<Self, ValidationError> {
        match input.into() {
            ApiKeyInput::Integer(n) => Ok(Self(n.to_string())),
            ApiKeyInput::DigitString(s) => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::invalid(
                        "apiKey",
                        format!("\"{s}\" is not a numeric string"),
                    ));
                }
                Ok(Self(s))
            }
        }
    }

    /// Decode an API key from untyped JSON.
    ///
    /// Integers (signed or unsigned) and digit strings are accepted.
    /// Floats, booleans, null, arrays and objects are rejected.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::new(i)
                } else if let Some(u) = n.as_u64() {
                    Self::new(u.to_string())
                } else {
                    Err(ValidationError::invalid(
                        "apiKey",
                        format!("expected integer or numeric string, got float {n}"),
                    ))
                }
            }
            Value::String(s) => Self::new(s.as_str()),
            other => Err(ValidationError::invalid(
                "apiKey",
                format!("expected integer or numeric string, got {}", kind_of(other)),
            )),
        }
    }

    /// Access the key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validate an untyped API key. See [`ApiKey::from_value`].
pub fn validate_api_key(value: &Value) -> Result<(), ValidationError> {
    ApiKey::from_value(value).map(|_| ())
}

/// A project API secret.
///
/// Custom `Debug` redacts the value to prevent credential leakage in log
/// output. The backing buffer is zeroed on drop.
#[derive(Clone)]
pub struct ApiSecret(Zeroizing<String>);

impl ApiSecret {
    /// Wrap a secret string. Every string is a well-formed secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    /// Decode an API secret from untyped JSON. Only strings are accepted.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) => Ok(Self::new(s.as_str())),
            other => Err(ValidationError::invalid(
                "apiSecret",
                format!("expected string, got {}", kind_of(other)),
            )),
        }
    }

    /// Access the raw secret. Callers must not log the result.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret([REDACTED])")
    }
}

impl<'de> Deserialize<'de> for ApiSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Validate an untyped API secret. See [`ApiSecret::from_value`].
pub fn validate_api_secret(value: &Value) -> Result<(), ValidationError> {
    ApiSecret::from_value(value).map(|_| ())
}

/// An absolute base URL with a scheme and a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApiUrl(Url);

impl_validating_deserialize!(ApiUrl);

impl ApiUrl {
    /// Parse and validate an API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if the value is not an
    /// absolute URL, or has no host (`mailto:`, `data:` and similar).
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let url = Url::parse(raw).map_err(|e| {
            ValidationError::invalid("apiUrl", format!("\"{raw}\" is not a valid URL: {e}"))
        })?;
        if url.cannot_be_a_base() || url.host().is_none() {
            return Err(ValidationError::invalid(
                "apiUrl",
                format!("\"{raw}\" has no host"),
            ));
        }
        Ok(Self(url))
    }

    /// Access the parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Consume into the parsed URL.
    pub fn into_url(self) -> Url {
        self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate an API base URL. See [`ApiUrl::new`].
pub fn validate_api_url(value: &str) -> Result<(), ValidationError> {
    ApiUrl::new(value).map(|_| ())
}

/// Validate a request timeout in seconds. Zero is rejected.
pub fn validate_default_timeout(secs: u64) -> Result<(), ValidationError> {
    if secs == 0 {
        return Err(ValidationError::invalid(
            "timeout",
            "must be a positive number of seconds",
        ));
    }
    Ok(())
}
