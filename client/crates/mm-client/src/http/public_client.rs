use crate::http::Transport;
use crate::{ClientResult, endpoints};

use mm_core::{RegisterRequest, TokenResponse};

use log::info;
use reqwest::Method;
use serde_json::Value;

/// Client for the endpoints that need no credential.
///
/// A 401 here means wrong username or password, not an expired session, so
/// it is reported as an ordinary [`crate::ClientError::Api`].
pub struct PublicClient {
    transport: Transport,
}

impl PublicClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// OAuth2 password form login
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenResponse> {
        let req = self
            .transport
            .request(Method::POST, endpoints::LOGIN)
            .form(&[("username", username), ("password", password)]);

        let response = self.transport.send(req).await?.error_for_status()?.json()?;
        info!("Login accepted for {username}");
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Value> {
        let req = self
            .transport
            .request(Method::POST, endpoints::REGISTER)
            .json(request);

        let created = self.transport.send(req).await?.error_for_status()?.json()?;
        info!("Registered account {}", request.username);
        Ok(created)
    }
}
