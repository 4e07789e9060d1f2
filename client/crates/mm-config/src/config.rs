use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    HistoryConfig, LoggingConfig, SessionConfig, StorageConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Environment variable carrying the backend URL
pub const API_URL_ENV: &str = "MOODMUSE_API_URL";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub history: HistoryConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `MOODMUSE_CONFIG_DIR` if set, else `~/.moodmuse/`
    /// 2. Create the config directory if it doesn't exist
    /// 3. Read `config.toml` if present, else defaults
    /// 4. Apply `MOODMUSE_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MOODMUSE_CONFIG_DIR env var > ~/.moodmuse/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;
        self.history.validate()?;
        self.validation.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Absolute path of the credential file.
    pub fn credential_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.credential_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.normalized_base_url());
        info!(
            "  storage: {} (key '{}')",
            self.storage.credential_file, self.storage.credential_key
        );
        info!("  session: identity via {}", self.session.identity_strategy);
        info!("  history: page_size={}", self.history.page_size);
        info!(
            "  validation: mood text {}-{} chars",
            self.validation.min_mood_text_length, self.validation.max_mood_text_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string(API_URL_ENV, &mut self.api.base_url);

        // Storage
        Self::apply_env_string(
            "MOODMUSE_CREDENTIAL_FILE",
            &mut self.storage.credential_file,
        );
        Self::apply_env_string("MOODMUSE_CREDENTIAL_KEY", &mut self.storage.credential_key);

        // Session
        Self::apply_env_parse(
            "MOODMUSE_IDENTITY_STRATEGY",
            &mut self.session.identity_strategy,
        );

        // History
        Self::apply_env_parse("MOODMUSE_HISTORY_PAGE_SIZE", &mut self.history.page_size);

        // Validation
        Self::apply_env_parse(
            "MOODMUSE_VALIDATION_MIN_MOOD_TEXT_LENGTH",
            &mut self.validation.min_mood_text_length,
        );
        Self::apply_env_parse(
            "MOODMUSE_VALIDATION_MAX_MOOD_TEXT_LENGTH",
            &mut self.validation.max_mood_text_length,
        );

        // Logging
        Self::apply_env_parse("MOODMUSE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MOODMUSE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MOODMUSE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
