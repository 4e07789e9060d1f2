pub mod analysis;
pub mod history_page;
pub mod identity;
pub mod mood_entry;
pub mod profile_update;
pub mod rag;
pub mod register_request;
pub mod suggestion;
pub mod suggestion_type;
pub mod timestamp;
pub mod token_response;
