//! Request builders for session-scoped calls: force mute, audio
//! connector, and DTMF playback.

use opentok_core::{
    validate_connection_id, validate_dtmf_digits, ForceMuteOptions, SessionId, StreamId,
    WebsocketOptions,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::OpenTokError;
use crate::request::{encode, reject, reject_missing_token, ApiRequest, Method, ProjectEndpoint};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectAudioBody<'a> {
    session_id: &'a SessionId,
    token: &'a str,
    websocket: &'a WebsocketOptions,
}

#[derive(Serialize)]
struct DtmfBody<'a> {
    digits: &'a str,
}

/// Builder for session-scoped requests.
#[derive(Debug, Clone)]
pub struct SessionClient {
    endpoint: ProjectEndpoint,
}

impl SessionClient {
    pub(crate) fn new(endpoint: ProjectEndpoint) -> Self {
        Self { endpoint }
    }

    /// `POST /v2/project/{apiKey}/session/{sessionId}/mute`
    ///
    /// `options` must carry `excludedStreams` and `active`.
    pub fn force_mute_all(&self, session_id: &str, options: &Value) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "force_mute_all";
        let session_id = SessionId::new(session_id).map_err(|e| reject(ENDPOINT, e))?;
        let options = ForceMuteOptions::from_value(options).map_err(|e| reject(ENDPOINT, e))?;

        let url = self.endpoint.url(&["session", session_id.as_str(), "mute"])?;
        let body = encode(ENDPOINT, &options)?;
        Ok(self.endpoint.request(Method::Post, url, Some(body)))
    }

    /// `POST /v2/project/{apiKey}/session/{sessionId}/stream/{streamId}/mute`
    pub fn force_mute_stream(&self, session_id: &str, stream_id: &str) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "force_mute_stream";
        let session_id = SessionId::new(session_id).map_err(|e| reject(ENDPOINT, e))?;
        let stream_id = StreamId::new(stream_id).map_err(|e| reject(ENDPOINT, e))?;

        let url = self.endpoint.url(&[
            "session",
            session_id.as_str(),
            "stream",
            stream_id.as_str(),
            "mute",
        ])?;
        Ok(self.endpoint.request(Method::Post, url, None))
    }

    /// `POST /v2/project/{apiKey}/connect`
    ///
    /// Streams session audio to the websocket described by `websocket`,
    /// which must carry a `uri`.
    pub fn connect_audio(
        &self,
        session_id: &str,
        token: &str,
        websocket: &Value,
    ) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "connect_audio";
        let session_id = SessionId::new(session_id).map_err(|e| reject(ENDPOINT, e))?;
        if token.is_empty() {
            return Err(reject_missing_token(ENDPOINT));
        }
        let websocket = WebsocketOptions::from_value(websocket).map_err(|e| reject(ENDPOINT, e))?;

        let url = self.endpoint.url(&["connect"])?;
        let body = encode(
            ENDPOINT,
            &ConnectAudioBody {
                session_id: &session_id,
                token,
                websocket: &websocket,
            },
        )?;
        Ok(self.endpoint.request(Method::Post, url, Some(body)))
    }

    /// `POST /v2/project/{apiKey}/session/{sessionId}[/connection/{connectionId}]/play-dtmf`
    ///
    /// Plays into every connection when `connection_id` is `None`.
    pub fn play_dtmf(
        &self,
        session_id: &str,
        connection_id: Option<&str>,
        digits: &str,
    ) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "play_dtmf";
        let session_id = SessionId::new(session_id).map_err(|e| reject(ENDPOINT, e))?;
        if let Some(cid) = connection_id {
            validate_connection_id(cid).map_err(|e| reject(ENDPOINT, e))?;
        }
        validate_dtmf_digits(digits).map_err(|e| reject(ENDPOINT, e))?;

        let url = match connection_id {
            Some(cid) => self.endpoint.url(&[
                "session",
                session_id.as_str(),
                "connection",
                cid,
                "play-dtmf",
            ])?,
            None => self
                .endpoint
                .url(&["session", session_id.as_str(), "play-dtmf"])?,
        };
        let body = encode(ENDPOINT, &DtmfBody { digits })?;
        Ok(self.endpoint.request(Method::Post, url, Some(body)))
    }
}
