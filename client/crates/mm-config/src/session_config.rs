use crate::IdentityStrategy;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub identity_strategy: IdentityStrategy,
}
