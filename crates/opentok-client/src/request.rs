//! Inert descriptions of OpenTok REST calls.
//!
//! Builders in this crate stop at an [`ApiRequest`]: method, absolute URL,
//! optional JSON body, and the configured timeout. Signing and sending the
//! request is the transport's job.

use std::time::Duration;

use opentok_core::{ApiKey, ValidationError};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::OpenTokConfig;
use crate::error::OpenTokError;

/// HTTP method of a described request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, ready-to-sign REST request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// Project-scoped URL builder shared by the resource clients.
#[derive(Debug, Clone)]
pub(crate) struct ProjectEndpoint {
    base: Url,
    api_key: ApiKey,
    timeout: Duration,
}

impl ProjectEndpoint {
    pub(crate) fn new(config: &OpenTokConfig) -> Self {
        Self {
            base: config.api_url.as_url().clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// `{base}/v2/project/{apiKey}/{segments...}`, each segment percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, OpenTokError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| OpenTokError::BaseUrl(self.base.clone()))?
            .pop_if_empty()
            .extend(["v2", "project", self.api_key.as_str()])
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url, body: Option<Value>) -> ApiRequest {
        tracing::debug!(method = %method, url = %url, has_body = body.is_some(), "described OpenTok request");
        ApiRequest {
            method,
            url,
            body,
            timeout: self.timeout,
        }
    }
}

/// Encode a request body, tagging failures with the endpoint name.
pub(crate) fn encode<T: Serialize>(endpoint: &'static str, body: &T) -> Result<Value, OpenTokError> {
    serde_json::to_value(body).map_err(|source| OpenTokError::Encode { endpoint, source })
}

/// Log a rejected caller argument and convert it into the client error.
pub(crate) fn reject(endpoint: &'static str, err: ValidationError) -> OpenTokError {
    tracing::warn!(
        endpoint,
        param = err.param(),
        "rejected OpenTok request argument: {}",
        err.reason()
    );
    OpenTokError::InvalidArgument(err)
}

/// Log a missing client token and convert it into the client error.
pub(crate) fn reject_missing_token(endpoint: &'static str) -> OpenTokError {
    tracing::warn!(
        endpoint,
        param = "token",
        "rejected OpenTok request argument: must be non-empty"
    );
    OpenTokError::MissingToken
}
