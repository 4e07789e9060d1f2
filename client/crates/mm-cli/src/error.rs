use mm_client::{ClientError, ErrorKind, PageError};
use mm_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Client {
        #[from]
        source: ClientError,
    },

    /// A page reported an inline error
    #[error("{message}")]
    Page { kind: ErrorKind, message: String },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Input error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing response: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PageError> for CliError {
    fn from(err: PageError) -> Self {
        Self::Page {
            kind: err.kind,
            message: err.message,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
