pub mod claim_decoder;
pub mod claims;
pub mod credential_store;
pub mod error;
pub mod file_credential_store;
pub mod identity_resolver;
pub mod memory_credential_store;

pub use claim_decoder::{ClaimDecoder, LocalClaimResolver};
pub use claims::Claims;
pub use credential_store::CredentialStore;
pub use error::{AuthError, AuthErrorResult};
pub use file_credential_store::FileCredentialStore;
pub use identity_resolver::IdentityResolver;
pub use memory_credential_store::MemoryCredentialStore;
