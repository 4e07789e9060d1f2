use crate::AuthenticatedClient;
use crate::pages::{PageError, PageLifecycle, lock};

use mm_core::validation::require;
use mm_core::{AnalysisRequest, AnalysisResponse, MoodTextBounds, RagQuery};

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub is_analyzing: bool,
    pub analysis: Option<AnalysisResponse>,
    pub analysis_error: Option<PageError>,
    pub is_asking: bool,
    pub answer: Option<String>,
    pub ask_error: Option<PageError>,
}

/// Mood analysis form and the "ask about my moods" card
pub struct DashboardController {
    api: Arc<AuthenticatedClient>,
    bounds: MoodTextBounds,
    lifecycle: PageLifecycle,
    state: Mutex<DashboardState>,
}

impl DashboardController {
    pub fn new(api: Arc<AuthenticatedClient>, bounds: MoodTextBounds) -> Self {
        Self {
            api,
            bounds,
            lifecycle: PageLifecycle::new(),
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> DashboardState {
        lock(&self.state).clone()
    }

    /// Mount the page; requests from an earlier mount no longer hold it busy
    pub fn mount(&self) -> DashboardState {
        let mut state = lock(&self.state);
        self.lifecycle.mount();
        state.is_analyzing = false;
        state.is_asking = false;
        state.clone()
    }

    /// Submit mood text for analysis.
    ///
    /// Text outside the configured bounds is rejected without a request.
    pub async fn analyze(&self, text: &str, emoji: Option<&str>) -> DashboardState {
        let (request, generation) = {
            let mut state = lock(&self.state);
            if state.is_analyzing {
                debug!("Analysis already in progress");
                return state.clone();
            }
            if let Err(e) = self.bounds.check(text) {
                state.analysis_error = Some(PageError::from(e));
                return state.clone();
            }
            state.is_analyzing = true;
            state.analysis_error = None;
            let request = AnalysisRequest {
                text_input: text.trim().to_string(),
                emoji: emoji
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(String::from),
            };
            (request, self.lifecycle.generation())
        };

        let outcome = self.api.analyze(&request).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let mut state = lock(&self.state);
        state.is_analyzing = false;
        match outcome {
            Ok(analysis) => state.analysis = Some(analysis),
            Err(e) => state.analysis_error = Some(PageError::from(e)),
        }
        state.clone()
    }

    /// Ask a free-form question about past entries
    pub async fn ask(&self, question: &str) -> DashboardState {
        let (query, generation) = {
            let mut state = lock(&self.state);
            if state.is_asking {
                debug!("Question already in progress");
                return state.clone();
            }
            if let Err(e) = require("question", question) {
                state.ask_error = Some(PageError::from(e));
                return state.clone();
            }
            state.is_asking = true;
            state.ask_error = None;
            state.answer = None;
            let query = RagQuery {
                question: question.trim().to_string(),
            };
            (query, self.lifecycle.generation())
        };

        let outcome = self.api.rag_query(&query).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let mut state = lock(&self.state);
        state.is_asking = false;
        match outcome {
            Ok(answer) => state.answer = Some(answer.answer),
            Err(e) => state.ask_error = Some(PageError::from(e)),
        }
        state.clone()
    }
}
