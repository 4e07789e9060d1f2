use crate::http::{CredentialSource, Reply, Transport};
use crate::{ClientError, ClientResult, endpoints};

use mm_core::{
    AnalysisRequest, AnalysisResponse, HistoryPage, Pagination, ProfileUpdate, RagAnswer, RagQuery,
};

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

const IMAGE_FIELD: &str = "file";

/// Client for every endpoint that needs the bearer token.
///
/// The token is read from the [`CredentialSource`] right before each request
/// is sent, never cached. All responses go through [`Self::execute`], which
/// is the single place a 401 is turned into a session expiry.
pub struct AuthenticatedClient {
    transport: Transport,
    credentials: Arc<dyn CredentialSource>,
}

impl AuthenticatedClient {
    pub fn new(transport: Transport, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Attach the current credential and send, applying the 401 policy
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Reply> {
        let credential = self.credentials.credential();
        let req = match credential.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let reply = self.transport.send(req).await?;

        if reply.status == StatusCode::UNAUTHORIZED {
            warn!(
                "Request rejected with 401 (credential epoch {})",
                credential.epoch()
            );
            self.credentials.reject(&credential);
            return Err(ClientError::unauthorized(reply.error_message()));
        }

        reply.error_for_status()
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<Value> {
        let req = self
            .transport
            .request(Method::PUT, endpoints::PROFILE)
            .json(update);
        self.execute(req).await?.json()
    }

    /// Upload a profile image as multipart field `file`
    pub async fn upload_profile_image(&self, path: &Path) -> ClientResult<Value> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::io(path.to_path_buf(), e))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("image"));

        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(image_mime(path))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let req = self
            .transport
            .request(Method::POST, endpoints::PROFILE_IMAGE)
            .multipart(form);
        self.execute(req).await?.json()
    }

    // =========================================================================
    // Mood analysis
    // =========================================================================

    pub async fn analyze(&self, request: &AnalysisRequest) -> ClientResult<AnalysisResponse> {
        let req = self
            .transport
            .request(Method::POST, endpoints::ANALYZE)
            .json(request);
        self.execute(req).await?.json()
    }

    pub async fn rag_query(&self, query: &RagQuery) -> ClientResult<RagAnswer> {
        let req = self
            .transport
            .request(Method::POST, endpoints::RAG_QUERY)
            .json(query);
        self.execute(req).await?.json()
    }

    // =========================================================================
    // History
    // =========================================================================

    pub async fn history(&self, pagination: Pagination) -> ClientResult<HistoryPage> {
        let req = self
            .transport
            .request(Method::GET, endpoints::HISTORY)
            .query(&[("page", pagination.page), ("limit", pagination.limit)]);
        self.execute(req).await?.json()
    }

    /// Delete one history entry; the response body is ignored
    pub async fn delete_history_entry(&self, id: i64) -> ClientResult<()> {
        let req = self
            .transport
            .request(Method::DELETE, &endpoints::history_entry(id));
        self.execute(req).await?;
        Ok(())
    }
}

fn image_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
