//! OpenTok client error types.

use opentok_core::ValidationError;

/// Errors from describing an OpenTok API request.
#[derive(Debug, thiserror::Error)]
pub enum OpenTokError {
    /// A caller-supplied argument failed validation.
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
    /// Request body could not be encoded.
    #[error("failed to encode request body for {endpoint}: {source}")]
    Encode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
    /// A call that authenticates as a client was given an empty token.
    #[error("a client token is required")]
    MissingToken,
    /// The configured base URL cannot carry a path.
    #[error("cannot build request URL from base {0}")]
    BaseUrl(url::Url),
}
