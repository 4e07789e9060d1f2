use std::str::FromStr;

use serde::Deserialize;

/// How the session turns a stored token into an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStrategy {
    /// Ask the backend (`GET /auth/users/me`); authoritative
    #[default]
    Remote,
    /// Decode the token's own claims; no network, may be stale
    LocalClaims,
}

impl IdentityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::LocalClaims => "local_claims",
        }
    }
}

impl FromStr for IdentityStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local_claims" | "local" => Ok(Self::LocalClaims),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for IdentityStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
