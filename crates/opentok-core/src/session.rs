//! # Session-Scoped Arguments
//!
//! Identifiers and parameters that address a live session: session and
//! stream identifiers, client roles, connection metadata, token expiry,
//! and the session-creation modes.
//!
//! ## Validation
//!
//! Session and stream identifiers are opaque tokens issued by the
//! platform. They are validated only for shape: non-empty, no whitespace.

use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;

/// Maximum byte length of connection metadata attached to a token.
pub const MAX_CONNECTION_DATA_LEN: usize = 1000;

/// Maximum lifetime of a client token: 30 days.
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 30 * 24 * 60 * 60;

fn require_opaque_id(param: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::invalid(param, "must be non-empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid(
            param,
            format!("\"{value}\" contains whitespace"),
        ));
    }
    Ok(())
}

/// A session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(String);

impl_validating_deserialize!(SessionId);

impl SessionId {
    /// Create a session identifier, validating shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        require_opaque_id("sessionId", &s)?;
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stream identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StreamId(String);

impl_validating_deserialize!(StreamId);

impl StreamId {
    /// Create a stream identifier, validating shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        require_opaque_id("streamId", &s)?;
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a session identifier.
pub fn validate_session_id(value: &str) -> Result<(), ValidationError> {
    require_opaque_id("sessionId", value)
}

/// Validate a stream identifier.
pub fn validate_stream_id(value: &str) -> Result<(), ValidationError> {
    require_opaque_id("streamId", value)
}

/// Validate a connection identifier.
pub fn validate_connection_id(value: &str) -> Result<(), ValidationError> {
    require_opaque_id("connectionId", value)
}

wire_enum! {
    /// The role granted to a client token.
    pub enum Role("role") {
        /// May publish and subscribe.
        Publisher => "publisher",
        /// May only subscribe.
        Subscriber => "subscriber",
        /// Publisher rights plus force-disconnect and force-mute.
        Moderator => "moderator",
        /// May only publish.
        PublisherOnly => "publisheronly",
    }
}

/// Validate a role name.
pub fn validate_role(value: &str) -> Result<(), ValidationError> {
    value.parse::<Role>().map(|_| ())
}

wire_enum! {
    /// How media is transported for a new session.
    pub enum MediaMode("mediaMode") {
        /// Clients exchange media directly where possible.
        Relayed => "relayed",
        /// Media flows through the platform's media router.
        Routed => "routed",
    }
}

wire_enum! {
    /// Whether a new session is archived automatically.
    pub enum ArchiveMode("archiveMode") {
        Manual => "manual",
        /// Requires a routed session.
        Always => "always",
    }
}

/// Validate connection metadata attached to a client token.
pub fn validate_connection_data(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_CONNECTION_DATA_LEN {
        return Err(ValidationError::invalid(
            "data",
            format!(
                "connection data is {} bytes; at most {MAX_CONNECTION_DATA_LEN} allowed",
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Validate a token expiry, given as a Unix timestamp in seconds.
///
/// The expiry must be strictly after `now` and no more than
/// [`MAX_TOKEN_LIFETIME_SECS`] after it.
pub fn validate_expire_time(expire_time: i64, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let now_secs = now.timestamp();
    if expire_time <= now_secs {
        return Err(ValidationError::invalid(
            "expireTime",
            format!("{expire_time} is not in the future"),
        ));
    }
    let latest = now_secs.saturating_add(MAX_TOKEN_LIFETIME_SECS);
    if expire_time > latest {
        return Err(ValidationError::invalid(
            "expireTime",
            format!("{expire_time} is more than 30 days in the future"),
        ));
    }
    Ok(())
}

/// Validate DTMF digits to be played into a session.
///
/// Allowed: `0`-`9`, `*`, `#`, and `p` (a 500 ms pause).
pub fn validate_dtmf_digits(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::invalid("digits", "must be non-empty"));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(*c, '*' | '#' | 'p')))
    {
        return Err(ValidationError::invalid(
            "digits",
            format!("'{bad}' is not a DTMF digit"),
        ));
    }
    Ok(())
}

/// Validate a location hint for session creation. Must be an IPv4 address.
pub fn validate_location(value: &str) -> Result<(), ValidationError> {
    value.parse::<Ipv4Addr>().map(|_| ()).map_err(|_| {
        ValidationError::invalid("location", format!("\"{value}\" is not an IPv4 address"))
    })
}
