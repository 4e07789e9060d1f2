use crate::pages::{PageError, PageLifecycle, lock};
use crate::{AuthenticatedClient, ErrorKind, Session};

use mm_core::ProfileUpdate;

use std::path::Path;
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use serde::Serialize;

const SAVED_MESSAGE: &str = "Profile updated successfully!";
const UPLOADED_MESSAGE: &str = "Profile photo uploaded successfully!";
const NOTHING_TO_SAVE_MESSAGE: &str = "Nothing to update.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    pub display_name: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub is_saving: bool,
    pub is_uploading: bool,
    pub success: Option<String>,
    pub error: Option<PageError>,
}

pub struct ProfileController {
    api: Arc<AuthenticatedClient>,
    session: Arc<Session>,
    lifecycle: PageLifecycle,
    state: Mutex<ProfileState>,
}

impl ProfileController {
    pub fn new(api: Arc<AuthenticatedClient>, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            lifecycle: PageLifecycle::new(),
            state: Mutex::new(ProfileState::default()),
        }
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> ProfileState {
        lock(&self.state).clone()
    }

    /// Mount the page and fill the form from the session user.
    ///
    /// Requests from an earlier mount no longer hold the page busy.
    pub fn mount(&self) -> ProfileState {
        let mut state = lock(&self.state);
        self.lifecycle.mount();
        state.is_saving = false;
        state.is_uploading = false;
        if let Some(user) = self.session.user() {
            state.display_name = user.username;
            state.bio = user.bio.unwrap_or_default();
            state.profile_image_url = user.profile_image_url;
        }
        state.clone()
    }

    pub async fn save(&self, display_name: &str, bio: &str) -> ProfileState {
        let (update, generation) = {
            let mut state = lock(&self.state);
            if state.is_saving {
                debug!("Profile save already in progress");
                return state.clone();
            }
            state.success = None;

            let display_name = display_name.trim();
            let update = ProfileUpdate {
                username: (!display_name.is_empty()).then(|| display_name.to_string()),
                bio: Some(bio.trim().to_string()),
            };
            if display_name.is_empty() && bio.trim().is_empty() {
                state.error = Some(PageError::new(
                    ErrorKind::Validation,
                    NOTHING_TO_SAVE_MESSAGE,
                ));
                return state.clone();
            }

            state.is_saving = true;
            state.error = None;
            (update, self.lifecycle.generation())
        };

        let outcome = self.api.update_profile(&update).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        {
            let mut state = lock(&self.state);
            state.is_saving = false;
            match outcome {
                Ok(_) => {
                    state.success = Some(String::from(SAVED_MESSAGE));
                    if let Some(username) = update.username {
                        state.display_name = username;
                    }
                    state.bio = update.bio.unwrap_or_default();
                }
                Err(e) => {
                    state.error = Some(PageError::from(e));
                    return state.clone();
                }
            }
        }

        self.refresh_user(generation).await
    }

    /// Upload a new profile picture from a local file
    pub async fn upload_image(&self, path: &Path) -> ProfileState {
        let generation = {
            let mut state = lock(&self.state);
            if state.is_uploading {
                debug!("Profile image upload already in progress");
                return state.clone();
            }
            state.is_uploading = true;
            state.success = None;
            state.error = None;
            self.lifecycle.generation()
        };

        let outcome = self.api.upload_profile_image(path).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        {
            let mut state = lock(&self.state);
            state.is_uploading = false;
            match outcome {
                Ok(_) => state.success = Some(String::from(UPLOADED_MESSAGE)),
                Err(e) => {
                    state.error = Some(PageError::from(e));
                    return state.clone();
                }
            }
        }

        self.refresh_user(generation).await
    }

    /// Re-resolve the session user so every page sees the edit
    async fn refresh_user(&self, generation: u64) -> ProfileState {
        match self.session.fetch_user().await {
            Ok(session) => {
                if let Some(user) = session.user
                    && self.lifecycle.is_current(generation)
                {
                    let mut state = lock(&self.state);
                    state.profile_image_url = user.profile_image_url;
                }
            }
            Err(e) => warn!("Profile saved but refreshing the user failed: {e}"),
        }
        self.state()
    }
}
