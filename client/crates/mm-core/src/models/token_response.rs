use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    String::from("bearer")
}

/// Body of a successful `/auth/login`.
///
/// `access_token` is optional so that a 200 without a token can be reported
/// as a failed login instead of a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}
