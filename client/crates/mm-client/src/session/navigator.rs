use crate::Route;

use std::sync::{Mutex, PoisonError};

/// Where redirects go. Implemented by whatever front end hosts the session.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Keeps every route it is sent to, in order
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, route: Route) -> usize {
        self.routes().iter().filter(|r| **r == route).count()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
