use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of suggestion attached to a mood entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    /// Comma separated hex colors
    Color,
    /// Link to a playlist
    Music,
    /// Inspirational quote
    Quote,
    /// Anything a newer backend sends that this client does not know yet
    #[serde(other)]
    Other,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Music => "music",
            Self::Quote => "quote",
            Self::Other => "other",
        }
    }
}

impl FromStr for SuggestionType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "color" => Ok(Self::Color),
            "music" => Ok(Self::Music),
            "quote" => Ok(Self::Quote),
            _ => Err(CoreError::InvalidSuggestionType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
