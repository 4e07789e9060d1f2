use crate::AuthenticatedClient;
use crate::pages::{PageError, PageLifecycle, lock};

use mm_core::{MoodEntry, Pagination};

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryState {
    pub entries: Vec<MoodEntry>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_entries: u64,
    pub is_loading: bool,
    pub deleting: Option<i64>,
    pub error: Option<PageError>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_entries: 0,
            is_loading: false,
            deleting: None,
            error: None,
        }
    }
}

/// Paginated list of past mood entries
pub struct HistoryController {
    api: Arc<AuthenticatedClient>,
    page_size: u32,
    lifecycle: PageLifecycle,
    state: Mutex<HistoryState>,
}

impl HistoryController {
    pub fn new(api: Arc<AuthenticatedClient>, page_size: u32) -> Self {
        Self {
            api,
            page_size,
            lifecycle: PageLifecycle::new(),
            state: Mutex::new(HistoryState::default()),
        }
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> HistoryState {
        lock(&self.state).clone()
    }

    /// Mount the page; requests from an earlier mount no longer hold it busy
    pub fn mount(&self) -> HistoryState {
        let mut state = lock(&self.state);
        self.lifecycle.mount();
        state.is_loading = false;
        state.deleting = None;
        state.clone()
    }

    /// Fetch `page`. On failure the entries already shown stay as they are.
    pub async fn load(&self, page: u32) -> HistoryState {
        let pagination = Pagination::new(page, self.page_size);
        let generation = {
            let mut state = lock(&self.state);
            if state.is_loading {
                debug!("History page already loading");
                return state.clone();
            }
            state.is_loading = true;
            state.error = None;
            self.lifecycle.generation()
        };

        let outcome = self.api.history(pagination).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let mut state = lock(&self.state);
        state.is_loading = false;
        match outcome {
            Ok(history) => {
                state.total_pages = history.total_pages();
                state.total_entries = history.total_entries;
                state.entries = history.data;
                state.current_page = pagination.page;
            }
            Err(e) => state.error = Some(PageError::from(e)),
        }
        state.clone()
    }

    /// Move to another page; pages outside `1..=total_pages` are ignored
    pub async fn go_to(&self, page: u32) -> HistoryState {
        let total_pages = lock(&self.state).total_pages;
        if !Pagination::is_navigable(page, total_pages) {
            debug!("Ignoring navigation to page {page} of {total_pages}");
            return self.state();
        }
        self.load(page).await
    }

    /// Delete an entry, then reload.
    ///
    /// Deleting the only entry of a page past the first moves back a page.
    pub async fn delete(&self, id: i64) -> HistoryState {
        let (pagination, generation) = {
            let mut state = lock(&self.state);
            if state.deleting.is_some() || state.is_loading {
                debug!("History busy, not deleting entry {id}");
                return state.clone();
            }
            state.deleting = Some(id);
            state.error = None;
            (
                Pagination::new(state.current_page, self.page_size),
                self.lifecycle.generation(),
            )
        };

        let outcome = self.api.delete_history_entry(id).await;

        if !self.lifecycle.is_current(generation) {
            return self.state();
        }

        let next_page = {
            let mut state = lock(&self.state);
            state.deleting = None;
            if let Err(e) = outcome {
                state.error = Some(PageError::from(e));
                return state.clone();
            }
            let next_page = pagination.page_after_delete(state.entries.len());
            state.entries.retain(|entry| entry.id != id);
            next_page
        };

        self.load(next_page).await
    }
}
