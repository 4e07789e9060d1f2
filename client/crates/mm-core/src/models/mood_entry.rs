use crate::models::timestamp;
use crate::{Suggestion, SuggestionType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved analysis as returned by the history endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub text_input: String,
    pub mood_label: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl MoodEntry {
    fn first_of(&self, kind: SuggestionType) -> Option<&str> {
        self.suggestions
            .iter()
            .find(|s| s.suggestion_type == kind)
            .map(|s| s.content.as_str())
    }

    pub fn quote(&self) -> Option<&str> {
        self.first_of(SuggestionType::Quote)
    }

    pub fn music_link(&self) -> Option<&str> {
        self.first_of(SuggestionType::Music)
    }

    /// Palette colors, split out of the comma separated color suggestion
    pub fn colors(&self) -> Vec<String> {
        self.first_of(SuggestionType::Color)
            .map(|content| {
                content
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}
