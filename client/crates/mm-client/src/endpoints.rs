//! REST paths relative to the configured base URL

pub const LOGIN: &str = "/api/v1/auth/login";
pub const REGISTER: &str = "/api/v1/auth/register";
pub const CURRENT_USER: &str = "/api/v1/auth/users/me";
pub const PROFILE: &str = "/api/v1/auth/profile";
pub const PROFILE_IMAGE: &str = "/api/v1/auth/users/me/upload-profile-image";
pub const ANALYZE: &str = "/api/v1/auth/analyze";
pub const HISTORY: &str = "/api/v1/auth/history";
pub const RAG_QUERY: &str = "/api/v1/rag/query";

pub fn history_entry(id: i64) -> String {
    format!("{HISTORY}/{id}")
}
