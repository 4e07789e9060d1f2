use crate::SessionState;

use mm_core::Identity;

/// Lifecycle of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not initialized yet, or disposed
    #[default]
    Unresolved,
    /// Identity resolution in flight. `previous` stays visible during a
    /// refresh; it is `None` after a login or at startup.
    Resolving { previous: Option<Identity> },
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionPhase {
    pub fn user(&self) -> Option<&Identity> {
        match self {
            SessionPhase::Resolving { previous } => previous.as_ref(),
            SessionPhase::Authenticated(identity) => Some(identity),
            SessionPhase::Unresolved | SessionPhase::Unauthenticated => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionPhase::Resolving { .. })
    }

    pub fn state(&self) -> SessionState {
        let user = self.user().cloned();
        SessionState {
            is_authenticated: user.is_some(),
            user,
            loading: self.is_loading(),
        }
    }
}
