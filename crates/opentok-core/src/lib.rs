//! # opentok-core -- Argument Validation for the OpenTok API
//!
//! Every value a caller hands to the OpenTok client passes through this
//! crate before it is placed on the wire. Each validator either returns
//! normally or fails with [`ValidationError::InvalidArgument`] naming the
//! offending parameter.
//!
//! ## Key Design Principles
//!
//! 1. **Typed inputs first.** `ApiKey`, `ApiSecret`, `ApiUrl`, `SessionId`,
//!    `StreamId`, `ArchiveId`, `Resolution`: all newtypes with validated
//!    constructors. Once a value has been constructed it is known-good.
//!
//! 2. **One discriminant check at the JSON boundary.** Option blobs arrive
//!    as `serde_json::Value`. The `validate_*` functions inspect the shape
//!    once and reject everything that is not the expected variant.
//!
//! 3. **Check-only.** The `validate_*` functions return `()` on success;
//!    the typed constructors return the decoded value for callers that
//!    want to keep it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `opentok-*` crates (this is the leaf).
//! - No I/O, no logging, no shared state. Every function is pure.
//! - No `panic!()` or `.unwrap()` outside tests.

#[macro_use]
mod macros;

pub mod archive;
pub mod credentials;
pub mod error;
pub mod options;
pub mod resolution;
pub mod session;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use archive::{
    validate_archive_id, validate_layout, validate_offset_and_count, ArchiveId, ArchiveOptions,
    Layout, LayoutType, OutputMode, StreamMode, MAX_LIST_COUNT,
};
pub use credentials::{
    validate_api_key, validate_api_secret, validate_api_url, validate_default_timeout, ApiKey,
    ApiKeyInput, ApiSecret, ApiUrl,
};
pub use error::ValidationError;
pub use options::{
    validate_force_mute_all_options, validate_websocket_options, AudioRate, ForceMuteOptions,
    WebsocketOptions,
};
pub use resolution::{validate_resolution, Resolution, ResolutionSet};
pub use session::{
    validate_connection_data, validate_connection_id, validate_dtmf_digits, validate_expire_time,
    validate_location, validate_role, validate_session_id, validate_stream_id, ArchiveMode,
    MediaMode, Role, SessionId, StreamId, MAX_CONNECTION_DATA_LEN, MAX_TOKEN_LIFETIME_SECS,
};
pub use value::is_assoc;
