use std::fmt;

/// The credential a request was dispatched with.
///
/// `epoch` identifies which write of the credential store the token came
/// from, so a rejection can be matched against the credential it refers to.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    epoch: u64,
    token: Option<String>,
}

impl Credential {
    pub fn new(epoch: u64, token: Option<String>) -> Self {
        Self { epoch, token }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("epoch", &self.epoch)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Supplies the bearer credential to [`crate::AuthenticatedClient`] and
/// receives rejections of it.
pub trait CredentialSource: Send + Sync {
    /// Current credential, read at dispatch time
    fn credential(&self) -> Credential;

    /// The server answered 401 to a request carrying `credential`
    fn reject(&self, credential: &Credential);
}
