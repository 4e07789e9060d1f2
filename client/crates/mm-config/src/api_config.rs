use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use serde::Deserialize;

/// Where the MoodMuse backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin, without the `/api/v1` prefix
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        let host = url
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        if host.trim_end_matches('/').is_empty() {
            return Err(ConfigError::api("api.base_url is missing a host"));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }
}
