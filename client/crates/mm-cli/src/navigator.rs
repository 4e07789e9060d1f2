use mm_client::{Navigator, Route};

use log::{debug, info};

/// Turns session redirects into hints on stderr
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }

    /// What the user should be told when sent to `route`, if anything
    pub fn hint(route: Route) -> Option<&'static str> {
        match route {
            Route::Login => {
                Some("Your session has expired. Run `muse login <username>` to sign in again.")
            }
            Route::Landing => Some("Signed out."),
            _ => None,
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match Self::hint(route) {
            Some(hint) => {
                info!("Redirect to {route}");
                eprintln!("{hint}");
            }
            None => debug!("Redirect to {route}"),
        }
    }
}
