mod dashboard;
mod history;
mod login;
mod page_error;
mod page_lifecycle;
mod profile;
mod register;

pub use dashboard::{DashboardController, DashboardState};
pub use history::{HistoryController, HistoryState};
pub use login::{LoginController, LoginState};
pub use page_error::PageError;
pub use page_lifecycle::PageLifecycle;
pub use profile::{ProfileController, ProfileState};
pub use register::{RegisterController, RegisterState};

use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
