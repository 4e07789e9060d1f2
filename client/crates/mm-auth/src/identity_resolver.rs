use crate::AuthErrorResult;

use mm_core::Identity;

use async_trait::async_trait;

/// Turns a bearer token into the identity it belongs to.
///
/// Errors for which [`crate::AuthError::revokes_credential`] is true mean the
/// token is bad and must be dropped; anything else is a transient failure
/// that leaves the token in place.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_identity(&self, token: &str) -> AuthErrorResult<Identity>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
