use crate::{ConfigError, ConfigErrorResult, DEFAULT_HISTORY_PAGE_SIZE};

use serde::Deserialize;

pub const MIN_HISTORY_PAGE_SIZE: u32 = 1;
pub const MAX_HISTORY_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entries requested per history page
    pub page_size: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_HISTORY_PAGE_SIZE,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_size < MIN_HISTORY_PAGE_SIZE || self.page_size > MAX_HISTORY_PAGE_SIZE {
            return Err(ConfigError::config(format!(
                "history.page_size must be {}-{}, got {}",
                MIN_HISTORY_PAGE_SIZE, MAX_HISTORY_PAGE_SIZE, self.page_size
            )));
        }
        Ok(())
    }
}
