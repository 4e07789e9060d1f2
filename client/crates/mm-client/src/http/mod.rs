mod authenticated_client;
mod credential_source;
mod public_client;
mod remote_profile_resolver;
mod reply;
mod transport;

pub use authenticated_client::AuthenticatedClient;
pub use credential_source::{Credential, CredentialSource};
pub use public_client::PublicClient;
pub use remote_profile_resolver::RemoteProfileResolver;
pub use reply::{Reply, error_message};
pub use transport::Transport;
