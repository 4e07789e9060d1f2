use crate::pages::{PageError, PageLifecycle, lock};
use crate::{PublicClient, Route, Session};

use mm_core::RegisterRequest;
use mm_core::validation::{check_email, require};

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;

const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterState {
    pub is_submitting: bool,
    pub error: Option<PageError>,
    pub success: Option<String>,
}

pub struct RegisterController {
    public: Arc<PublicClient>,
    session: Arc<Session>,
    lifecycle: PageLifecycle,
    state: Mutex<RegisterState>,
}

impl RegisterController {
    pub fn new(public: Arc<PublicClient>, session: Arc<Session>) -> Self {
        Self {
            public,
            session,
            lifecycle: PageLifecycle::new(),
            state: Mutex::new(RegisterState::default()),
        }
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> RegisterState {
        lock(&self.state).clone()
    }

    /// Mount the page; a submission from an earlier mount no longer holds it busy
    pub fn mount(&self) -> RegisterState {
        let mut state = lock(&self.state);
        self.lifecycle.mount();
        state.is_submitting = false;
        state.clone()
    }

    pub async fn submit(&self, username: &str, email: &str, password: &str) -> RegisterState {
        let (request, generation) = {
            let mut state = lock(&self.state);
            if state.is_submitting {
                debug!("Registration already in progress");
                return state.clone();
            }
            state.success = None;

            let checked = require("username", username)
                .and_then(|_| check_email(email))
                .and_then(|_| require("password", password));
            if let Err(e) = checked {
                state.error = Some(PageError::from(e));
                return state.clone();
            }

            state.is_submitting = true;
            state.error = None;
            let request = RegisterRequest {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
            };
            (request, self.lifecycle.generation())
        };

        let outcome = self.public.register(&request).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let snapshot = {
            let mut state = lock(&self.state);
            state.is_submitting = false;
            match outcome {
                Ok(_) => state.success = Some(String::from(SUCCESS_MESSAGE)),
                Err(e) => state.error = Some(PageError::from(e)),
            }
            state.clone()
        };

        if snapshot.success.is_some() {
            self.session.navigate(Route::Login);
        }
        snapshot
    }
}
