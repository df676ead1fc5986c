//! # opentok-client -- Validated request builder for the OpenTok REST API
//!
//! Turns caller arguments into fully validated [`ApiRequest`] descriptions:
//! - **Sessions**: force mute, audio connector (websocket), DTMF playback
//! - **Archives**: start, stop, delete, list
//!
//! Every argument passes through [`opentok_core`] first. A rejected
//! argument surfaces as [`OpenTokError::InvalidArgument`] and is logged at
//! `warn` with the offending parameter name.
//!
//! ## Scope
//!
//! This crate does not sign or send requests. The transport that does is
//! handed an [`ApiRequest`] carrying method, absolute URL, JSON body, and
//! the configured timeout.
//!
//! ## API Path Convention
//!
//! `{api_url}/v2/project/{apiKey}/{resource}`, for example
//! `https://api.opentok.com/v2/project/47347801/archive`.

pub mod archives;
pub mod config;
pub mod error;
pub mod request;
pub mod sessions;

pub use config::{ConfigError, OpenTokConfig};
pub use error::OpenTokError;
pub use request::{ApiRequest, Method};

use opentok_core::ResolutionSet;
use request::ProjectEndpoint;

/// Top-level OpenTok client. Holds the request builders for each resource.
#[derive(Debug, Clone)]
pub struct OpenTok {
    config: OpenTokConfig,
    sessions: sessions::SessionClient,
    archives: archives::ArchiveClient,
}

impl OpenTok {
    /// Create a client that accepts the platform's default resolutions.
    pub fn new(config: OpenTokConfig) -> Self {
        Self::with_resolutions(config, ResolutionSet::default())
    }

    /// Create a client with a deployment-specific resolution allow-list.
    pub fn with_resolutions(config: OpenTokConfig, resolutions: ResolutionSet) -> Self {
        let endpoint = ProjectEndpoint::new(&config);
        Self {
            sessions: sessions::SessionClient::new(endpoint.clone()),
            archives: archives::ArchiveClient::new(endpoint, resolutions),
            config,
        }
    }

    /// Create a client from `OPENTOK_*` environment variables.
    pub fn from_env() -> Result<Self, OpenTokError> {
        Ok(Self::new(OpenTokConfig::from_env()?))
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &OpenTokConfig {
        &self.config
    }

    /// Access the session request builder.
    pub fn sessions(&self) -> &sessions::SessionClient {
        &self.sessions
    }

    /// Access the archive request builder.
    pub fn archives(&self) -> &archives::ArchiveClient {
        &self.archives
    }
}
