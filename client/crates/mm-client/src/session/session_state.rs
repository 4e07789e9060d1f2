use mm_core::Identity;

use serde::Serialize;

/// What every page sees of the session.
///
/// `is_authenticated` is true exactly when `user` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<Identity>,
    pub loading: bool,
}
