use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid suggestion type: {value} {location}")]
    InvalidSuggestionType {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller location
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing next to the offending form field
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidSuggestionType { value, .. } => {
                format!("Unknown suggestion type '{value}'")
            }
        }
    }
}

pub type CoreErrorResult<T> = StdResult<T, CoreError>;
