use mm_auth::{AuthError, AuthErrorResult, CredentialStore, IdentityResolver, MemoryCredentialStore};
use mm_core::Identity;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

#[derive(Clone)]
pub enum Outcome {
    Resolve(Identity),
    Revoke,
    Unavailable,
}

/// Resolver answering from a token table; unknown tokens are rejected.
/// A gated token waits until [`ScriptedResolver::release`] is called.
#[derive(Default)]
pub struct ScriptedResolver {
    outcomes: Mutex<HashMap<String, Outcome>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: AtomicUsize,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, token: &str, outcome: Outcome) -> Self {
        self.set(token, outcome);
        self
    }

    pub fn set(&self, token: &str, outcome: Outcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(token.to_string(), outcome);
    }

    pub fn gate(&self, token: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(token.to_string(), Arc::new(Notify::new()));
    }

    pub fn release(&self, token: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(token) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for ScriptedResolver {
    async fn resolve_identity(&self, token: &str) -> AuthErrorResult<Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().get(token).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let outcome = self.outcomes.lock().unwrap().get(token).cloned();
        match outcome {
            Some(Outcome::Resolve(identity)) => Ok(identity),
            Some(Outcome::Unavailable) => Err(AuthError::unavailable("backend down")),
            Some(Outcome::Revoke) | None => Err(AuthError::unauthorized("bad token")),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Memory store that counts clears
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryCredentialStore,
    clears: AtomicUsize,
}

impl CountingStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            inner: MemoryCredentialStore::with_token(token),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl CredentialStore for CountingStore {
    fn get(&self) -> Option<String> {
        self.inner.get()
    }

    fn set(&self, token: &str) -> AuthErrorResult<()> {
        self.inner.set(token)
    }

    fn clear(&self) -> AuthErrorResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear()
    }
}

pub fn identity(id: i64, username: &str) -> Identity {
    Identity::from_claims(id, username, None)
}
