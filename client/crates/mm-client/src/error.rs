use mm_auth::AuthError;
use mm_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const NETWORK_MESSAGE: &str =
    "Could not reach MoodMuse. Please check your connection and try again.";
const UNEXPECTED_RESPONSE_MESSAGE: &str = "An unexpected error occurred. Please try again.";
const STORAGE_MESSAGE: &str = "Could not save your session on this device.";

/// Coarse error category shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input rejected before any request was sent
    Validation,
    /// Credential rejected; handled centrally by the session
    Auth,
    /// Server answered with an error
    Server,
    /// No response
    Network,
    /// Local credential storage failed
    Storage,
}

/// Errors that can occur while talking to the MoodMuse API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation failed: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session error: {source}")]
    Auth {
        #[source]
        source: AuthError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ClientError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } | Self::Io { .. } => ErrorKind::Validation,
            Self::Unauthorized { .. } => ErrorKind::Auth,
            Self::Api { .. } | Self::Json { .. } => ErrorKind::Server,
            Self::Network { .. } => ErrorKind::Network,
            Self::Auth { source } if source.revokes_credential() => ErrorKind::Auth,
            Self::Auth {
                source: AuthError::Unavailable { .. },
            } => ErrorKind::Network,
            Self::Auth { .. } => ErrorKind::Storage,
        }
    }

    /// Text for an inline error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source } => source.user_message(),
            Self::Api { message, .. } => message.clone(),
            Self::Io { path, .. } => format!("Could not read file {}.", path.display()),
            _ => match self.kind() {
                ErrorKind::Auth => String::from(SESSION_EXPIRED_MESSAGE),
                ErrorKind::Network => String::from(NETWORK_MESSAGE),
                ErrorKind::Storage => String::from(STORAGE_MESSAGE),
                ErrorKind::Validation | ErrorKind::Server => {
                    String::from(UNEXPECTED_RESPONSE_MESSAGE)
                }
            },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    fn from(source: CoreError) -> Self {
        ClientError::Validation { source }
    }
}

impl From<AuthError> for ClientError {
    fn from(source: AuthError) -> Self {
        ClientError::Auth { source }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
