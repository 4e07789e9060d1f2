use crate::endpoints;
use crate::http::Transport;

use mm_auth::{AuthError, AuthErrorResult, IdentityResolver};
use mm_core::Identity;

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, StatusCode};

/// Resolves the identity by asking the backend who the token belongs to.
///
/// Only a 401 revokes the credential. Network failures, other statuses and
/// undecodable bodies are reported as unavailable and leave it in place.
pub struct RemoteProfileResolver {
    transport: Transport,
}

impl RemoteProfileResolver {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl IdentityResolver for RemoteProfileResolver {
    async fn resolve_identity(&self, token: &str) -> AuthErrorResult<Identity> {
        let req = self
            .transport
            .request(Method::GET, endpoints::CURRENT_USER)
            .bearer_auth(token);

        let reply = self
            .transport
            .send(req)
            .await
            .map_err(|e| AuthError::unavailable(e.to_string()))?;

        if reply.status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::unauthorized(reply.error_message()));
        }
        if !reply.is_success() {
            return Err(AuthError::unavailable(format!(
                "{} (status: {})",
                reply.error_message(),
                reply.status.as_u16()
            )));
        }

        let identity: Identity = reply
            .json()
            .map_err(|e| AuthError::unavailable(e.to_string()))?;
        debug!("Backend resolved user {}", identity.id);
        Ok(identity)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
