mod api_config;
mod config;
mod error;
mod history_config;
mod identity_strategy;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::{API_URL_ENV, Config};
pub use error::{ConfigError, ConfigErrorResult};
pub use history_config::HistoryConfig;
pub use identity_strategy::IdentityStrategy;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "MOODMUSE_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".moodmuse";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CREDENTIAL_FILE: &str = "credentials.json";
const DEFAULT_CREDENTIAL_KEY: &str = "token";
const DEFAULT_HISTORY_PAGE_SIZE: u32 = 9;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
