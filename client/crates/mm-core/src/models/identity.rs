use crate::models::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as the client knows it.
///
/// Derived from the stored token (local claims) or fetched from
/// `/auth/users/me`. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Identity {
    /// Identity carrying only what a token claim set can hold
    pub fn from_claims(id: i64, username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email,
            created_at: None,
            profile_image_url: None,
            bio: None,
        }
    }
}
