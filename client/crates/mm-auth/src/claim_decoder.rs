use crate::{AuthError, AuthErrorResult, Claims, IdentityResolver};

use mm_core::Identity;

use std::collections::HashSet;
use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::debug;

const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Reads a token's claims without a network call.
///
/// The signature is NOT verified; the client holds no key, and the server
/// re-checks every request. `exp` is enforced when present. A token without
/// `exp` stays "valid" here until the server rejects it with a 401, so the
/// local view can be stale for as long as such a token lives.
pub struct ClaimDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Default for ClaimDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimDecoder {
    pub fn new() -> Self {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = CLOCK_SKEW_LEEWAY_SECS;
        validation.required_spec_claims = HashSet::new();

        Self {
            decoding_key: DecodingKey::from_secret(&[]),
            validation,
        }
    }

    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidToken => AuthError::InvalidToken {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

/// Identity strategy backed by [`ClaimDecoder`]
#[derive(Default)]
pub struct LocalClaimResolver {
    decoder: ClaimDecoder,
}

impl LocalClaimResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityResolver for LocalClaimResolver {
    async fn resolve_identity(&self, token: &str) -> AuthErrorResult<Identity> {
        let identity = self.decoder.decode(token)?.into_identity()?;
        debug!("Resolved identity {} from token claims", identity.id);
        Ok(identity)
    }

    fn name(&self) -> &'static str {
        "local_claims"
    }
}
