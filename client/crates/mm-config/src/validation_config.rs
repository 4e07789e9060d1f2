use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_MOOD_TEXT_LENGTH: usize = 1;
pub const MAX_MOOD_TEXT_LENGTH: usize = 5000;
pub const DEFAULT_MIN_MOOD_TEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_MOOD_TEXT_LENGTH: usize = 300;

/// Client-side input limits, checked before any request is sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum characters in a mood description
    pub min_mood_text_length: usize,
    /// Maximum characters in a mood description
    pub max_mood_text_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_mood_text_length: DEFAULT_MIN_MOOD_TEXT_LENGTH,
            max_mood_text_length: DEFAULT_MAX_MOOD_TEXT_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("min_mood_text_length", self.min_mood_text_length),
            ("max_mood_text_length", self.max_mood_text_length),
        ] {
            if !(MIN_MOOD_TEXT_LENGTH..=MAX_MOOD_TEXT_LENGTH).contains(&value) {
                return Err(ConfigError::config(format!(
                    "validation.{} must be {}-{}, got {}",
                    name, MIN_MOOD_TEXT_LENGTH, MAX_MOOD_TEXT_LENGTH, value
                )));
            }
        }

        if self.min_mood_text_length > self.max_mood_text_length {
            return Err(ConfigError::config(format!(
                "validation.min_mood_text_length ({}) exceeds max_mood_text_length ({})",
                self.min_mood_text_length, self.max_mood_text_length
            )));
        }

        Ok(())
    }
}
