use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREDENTIAL_FILE, DEFAULT_CREDENTIAL_KEY};

use std::path::Path;

use serde::Deserialize;

/// Durable credential slot settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Credential file, relative to the config directory
    pub credential_file: String,
    /// Key the token is stored under inside the credential file
    pub credential_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credential_file: String::from(DEFAULT_CREDENTIAL_FILE),
            credential_key: String::from(DEFAULT_CREDENTIAL_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.credential_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.credential_file cannot be empty"));
        }

        if Path::new(&self.credential_file).is_absolute() || self.credential_file.contains("..")
        {
            return Err(ConfigError::storage(
                "storage.credential_file must be relative and cannot contain '..'",
            ));
        }

        if self.credential_key.trim().is_empty() {
            return Err(ConfigError::storage("storage.credential_key cannot be empty"));
        }

        Ok(())
    }
}
