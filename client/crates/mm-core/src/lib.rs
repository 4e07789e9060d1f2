pub mod error;
pub mod models;
pub mod pagination;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreErrorResult};
pub use models::analysis::{ANALYSIS_CONTRACT_VERSION, AnalysisRequest, AnalysisResponse};
pub use models::history_page::HistoryPage;
pub use models::identity::Identity;
pub use models::mood_entry::MoodEntry;
pub use models::profile_update::ProfileUpdate;
pub use models::rag::{RagAnswer, RagQuery};
pub use models::register_request::RegisterRequest;
pub use models::suggestion::Suggestion;
pub use models::suggestion_type::SuggestionType;
pub use models::token_response::TokenResponse;
pub use pagination::Pagination;
pub use validation::MoodTextBounds;
