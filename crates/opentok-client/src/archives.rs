//! Request builders for archive calls.

use opentok_core::{validate_offset_and_count, ArchiveId, ArchiveOptions, ResolutionSet, SessionId};
use serde::Serialize;

use crate::error::OpenTokError;
use crate::request::{encode, reject, ApiRequest, Method, ProjectEndpoint};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartArchiveBody<'a> {
    session_id: &'a SessionId,
    #[serde(flatten)]
    options: &'a ArchiveOptions,
}

/// Builder for archive requests.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    endpoint: ProjectEndpoint,
    resolutions: ResolutionSet,
}

impl ArchiveClient {
    pub(crate) fn new(endpoint: ProjectEndpoint, resolutions: ResolutionSet) -> Self {
        Self {
            endpoint,
            resolutions,
        }
    }

    /// Resolutions accepted by [`ArchiveClient::start`].
    pub fn resolutions(&self) -> &ResolutionSet {
        &self.resolutions
    }

    /// `POST /v2/project/{apiKey}/archive`
    pub fn start(&self, session_id: &str, options: &ArchiveOptions) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "start_archive";
        let session_id = SessionId::new(session_id).map_err(|e| reject(ENDPOINT, e))?;
        options
            .check(&self.resolutions)
            .map_err(|e| reject(ENDPOINT, e))?;

        let url = self.endpoint.url(&["archive"])?;
        let body = encode(
            ENDPOINT,
            &StartArchiveBody {
                session_id: &session_id,
                options,
            },
        )?;
        Ok(self.endpoint.request(Method::Post, url, Some(body)))
    }

    /// `POST /v2/project/{apiKey}/archive/{archiveId}/stop`
    pub fn stop(&self, archive_id: &str) -> Result<ApiRequest, OpenTokError> {
        let archive_id = archive_id.parse::<ArchiveId>().map_err(|e| reject("stop_archive", e))?;
        let id = archive_id.to_string();
        let url = self.endpoint.url(&["archive", id.as_str(), "stop"])?;
        Ok(self.endpoint.request(Method::Post, url, None))
    }

    /// `DELETE /v2/project/{apiKey}/archive/{archiveId}`
    pub fn delete(&self, archive_id: &str) -> Result<ApiRequest, OpenTokError> {
        let archive_id = archive_id.parse::<ArchiveId>().map_err(|e| reject("delete_archive", e))?;
        let id = archive_id.to_string();
        let url = self.endpoint.url(&["archive", id.as_str()])?;
        Ok(self.endpoint.request(Method::Delete, url, None))
    }

    /// `GET /v2/project/{apiKey}/archive?offset=&count=&sessionId=`
    pub fn list(
        &self,
        offset: i64,
        count: Option<i64>,
        session_id: Option<&str>,
    ) -> Result<ApiRequest, OpenTokError> {
        const ENDPOINT: &str = "list_archives";
        validate_offset_and_count(offset, count).map_err(|e| reject(ENDPOINT, e))?;
        let session_id = session_id
            .map(SessionId::new)
            .transpose()
            .map_err(|e| reject(ENDPOINT, e))?;

        let mut url = self.endpoint.url(&["archive"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("offset", &offset.to_string());
            if let Some(count) = count {
                query.append_pair("count", &count.to_string());
            }
            if let Some(sid) = &session_id {
                query.append_pair("sessionId", sid.as_str());
            }
        }
        Ok(self.endpoint.request(Method::Get, url, None))
    }
}
