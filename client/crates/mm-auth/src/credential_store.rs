use crate::AuthErrorResult;

/// Single slot holding the bearer token.
///
/// `get` never fails: a slot that cannot be read is an empty slot.
/// Implementations keep no expiry bookkeeping; validity is decided by the
/// identity resolver and the server.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> AuthErrorResult<()>;

    /// Remove the token. Clearing an empty slot succeeds.
    fn clear(&self) -> AuthErrorResult<()>;
}
