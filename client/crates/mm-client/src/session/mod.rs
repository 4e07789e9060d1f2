mod navigator;
mod route;
#[allow(clippy::module_inception)]
mod session;
mod session_phase;
mod session_state;

pub use navigator::{Navigator, RecordingNavigator};
pub use route::Route;
pub use session::Session;
pub use session_phase::SessionPhase;
pub use session_state::SessionState;
