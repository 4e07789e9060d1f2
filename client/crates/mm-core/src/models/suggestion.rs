use crate::SuggestionType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: i64,
    pub suggestion_type: SuggestionType,
    pub content: String,
}
