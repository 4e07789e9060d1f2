use serde::{Deserialize, Serialize};

/// Version of the analysis request/response shape this client speaks.
///
/// Version 1: request `{text_input, emoji?}`, response
/// `{mood_entry_id, color_palette, spotify_playlist, inspirational_quote}`.
/// Responses in any other shape are rejected rather than guessed at.
pub const ANALYSIS_CONTRACT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text_input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub mood_entry_id: i64,
    pub color_palette: Vec<String>,
    pub spotify_playlist: String,
    pub inspirational_quote: String,
}
