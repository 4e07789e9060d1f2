use crate::pages::{PageError, PageLifecycle, lock};
use crate::{ErrorKind, PublicClient, Route, Session};

use mm_core::validation::require;

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;

const NO_TOKEN_MESSAGE: &str = "Login failed: No token received.";
const UNVERIFIED_MESSAGE: &str = "Login failed: your account could not be verified.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginState {
    pub is_submitting: bool,
    pub error: Option<PageError>,
}

pub struct LoginController {
    public: Arc<PublicClient>,
    session: Arc<Session>,
    lifecycle: PageLifecycle,
    state: Mutex<LoginState>,
}

impl LoginController {
    pub fn new(public: Arc<PublicClient>, session: Arc<Session>) -> Self {
        Self {
            public,
            session,
            lifecycle: PageLifecycle::new(),
            state: Mutex::new(LoginState::default()),
        }
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> LoginState {
        lock(&self.state).clone()
    }

    /// Mount the page; a submission from an earlier mount no longer holds it busy
    pub fn mount(&self) -> LoginState {
        let mut state = lock(&self.state);
        self.lifecycle.mount();
        state.is_submitting = false;
        state.clone()
    }

    /// Exchange username and password for a token and hand it to the session.
    ///
    /// On success the session is authenticated and the user is sent to the
    /// dashboard.
    pub async fn submit(&self, username: &str, password: &str) -> LoginState {
        let generation = {
            let mut state = lock(&self.state);
            if state.is_submitting {
                debug!("Login already in progress");
                return state.clone();
            }
            let checked = require("username", username).and_then(|_| require("password", password));
            if let Err(e) = checked {
                state.error = Some(PageError::from(e));
                return state.clone();
            }
            state.is_submitting = true;
            state.error = None;
            self.lifecycle.generation()
        };

        let outcome = self.authenticate(username.trim(), password).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let mut state = lock(&self.state);
        state.is_submitting = false;
        state.error = outcome.err();
        state.clone()
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<(), PageError> {
        let response = self.public.login(username, password).await?;

        let token = response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PageError::new(ErrorKind::Server, NO_TOKEN_MESSAGE))?;

        let session = self.session.login(&token).await?;
        if !session.is_authenticated {
            return Err(PageError::new(ErrorKind::Auth, UNVERIFIED_MESSAGE));
        }

        self.session.navigate(Route::Dashboard);
        Ok(())
    }
}
