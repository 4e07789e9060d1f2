use crate::{AuthError, AuthErrorResult};

use mm_core::Identity;

use serde::{Deserialize, Serialize};

/// Claim set carried by a self-contained session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id)
    pub sub: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration timestamp (Unix); tokens without one are never expired locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::invalid_claim("sub", "sub (user_id) cannot be empty"));
        }

        if self.sub.parse::<i64>().is_err() {
            return Err(AuthError::invalid_claim(
                "sub",
                format!("sub must be a numeric user id, got '{}'", self.sub),
            ));
        }

        if self.username.trim().is_empty() {
            return Err(AuthError::invalid_claim("username", "username cannot be empty"));
        }

        Ok(())
    }

    /// Validate and convert to the identity the session exposes
    #[track_caller]
    pub fn into_identity(self) -> AuthErrorResult<Identity> {
        self.validate()?;
        let id = self
            .sub
            .parse::<i64>()
            .map_err(|e| AuthError::invalid_claim("sub", e.to_string()))?;
        Ok(Identity::from_claims(id, self.username, self.email))
    }
}
