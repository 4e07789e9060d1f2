pub mod app;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod pages;
pub mod session;

#[cfg(test)]
mod tests;

pub use app::{MoodMuse, build_resolver};
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::{
    AuthenticatedClient, Credential, CredentialSource, PublicClient, RemoteProfileResolver,
    Transport,
};
pub use pages::{
    DashboardController, DashboardState, HistoryController, HistoryState, LoginController,
    LoginState, PageError, PageLifecycle, ProfileController, ProfileState, RegisterController,
    RegisterState,
};
pub use session::{Navigator, RecordingNavigator, Route, Session, SessionPhase, SessionState};
