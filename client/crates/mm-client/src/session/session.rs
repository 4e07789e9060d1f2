use crate::http::{Credential, CredentialSource};
use crate::{ClientError, ClientResult, Navigator, Route, SessionPhase, SessionState};

use mm_auth::{AuthErrorResult, CredentialStore, IdentityResolver};
use mm_core::Identity;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::watch;

/// Counters guarded together with every credential store write.
///
/// `epoch` moves on each set/clear of the credential. `ticket` moves on each
/// resolution start and on anything that supersedes one.
#[derive(Debug, Default)]
struct Ledger {
    epoch: u64,
    ticket: u64,
}

/// A resolution that has been started but not settled
struct Pending {
    ticket: u64,
    credential: Credential,
    /// A rejection sends the user to login, as for any authenticated call
    redirect_on_reject: bool,
}

/// Client-side authentication state.
///
/// Created once at the application root and shared as `Arc<Session>`. The
/// session is the only writer of the credential store.
///
/// Store writes run synchronously under the ledger lock so the credential and
/// its epoch always change together. The stores write one small file, so the
/// calling worker is blocked only for that write.
pub struct Session {
    store: Arc<dyn CredentialStore>,
    resolver: Arc<dyn IdentityResolver>,
    navigator: Arc<dyn Navigator>,
    ledger: Mutex<Ledger>,
    phase: watch::Sender<SessionPhase>,
}

impl Session {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        resolver: Arc<dyn IdentityResolver>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (phase, _) = watch::channel(SessionPhase::Unresolved);
        Self {
            store,
            resolver,
            navigator,
            ledger: Mutex::new(Ledger::default()),
            phase,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.borrow().clone()
    }

    pub fn state(&self) -> SessionState {
        self.phase.borrow().state()
    }

    pub fn user(&self) -> Option<Identity> {
        self.phase.borrow().user().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.phase.subscribe()
    }

    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Resolve whatever credential is already stored.
    ///
    /// A stored token the server rejects is cleared without a redirect; the
    /// caller is already on its entry page.
    pub async fn init(&self) -> ClientResult<SessionState> {
        let pending = {
            let mut ledger = self.ledger();
            self.begin(&mut ledger, None, false)
        };
        self.resolve(pending).await
    }

    /// Drop in-flight resolutions and return to [`SessionPhase::Unresolved`]
    pub fn dispose(&self) {
        let mut ledger = self.ledger();
        ledger.ticket += 1;
        self.phase.send_replace(SessionPhase::Unresolved);
        debug!("Session disposed");
    }

    /// Store a freshly issued token and resolve who it belongs to.
    ///
    /// The returned state is authenticated only if resolution succeeded.
    pub async fn login(&self, token: &str) -> ClientResult<SessionState> {
        let pending = {
            let mut ledger = self.ledger();
            self.store.set(token)?;
            ledger.epoch += 1;
            info!("Stored new credential (epoch {})", ledger.epoch);
            self.begin(&mut ledger, None, false)
        };
        self.resolve(pending).await
    }

    /// Re-resolve the identity for the stored token, e.g. after a profile edit.
    ///
    /// A rejection expires the session exactly like a 401 from any other
    /// authenticated request.
    pub async fn fetch_user(&self) -> ClientResult<SessionState> {
        let pending = {
            let mut ledger = self.ledger();
            let previous = self.user();
            self.begin(&mut ledger, previous, true)
        };
        self.resolve(pending).await
    }

    /// Forget the credential and go to the landing page.
    ///
    /// The session is unauthenticated afterwards even if removing the
    /// credential file failed; that failure is still returned.
    pub fn logout(&self) -> ClientResult<()> {
        let cleared = {
            let mut ledger = self.ledger();
            let cleared = self.store.clear();
            ledger.epoch += 1;
            ledger.ticket += 1;
            self.phase.send_replace(SessionPhase::Unauthenticated);
            cleared
        };
        info!("Logged out");
        self.navigator.navigate(Route::Landing);
        cleared.map_err(ClientError::from)
    }

    /// Handle a server rejection of `credential`.
    ///
    /// Only the first rejection of a given credential epoch clears the store
    /// and redirects to login; returns whether this call did so.
    pub fn expire(&self, credential: &Credential) -> bool {
        let revoked = {
            let mut ledger = self.ledger();
            self.revoke(&mut ledger, credential.epoch())
        };
        if revoked {
            self.redirect_to_login();
        }
        revoked
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear the credential of `epoch` if it is still current
    fn revoke(&self, ledger: &mut Ledger, epoch: u64) -> bool {
        if ledger.epoch != epoch {
            debug!(
                "Ignoring rejection of stale credential (epoch {epoch}, current {})",
                ledger.epoch
            );
            return false;
        }
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear rejected credential: {e}");
        }
        ledger.epoch += 1;
        ledger.ticket += 1;
        self.phase.send_replace(SessionPhase::Unauthenticated);
        true
    }

    fn redirect_to_login(&self) {
        warn!("Session expired, redirecting to {}", Route::Login);
        self.navigator.navigate(Route::Login);
    }

    fn begin(
        &self,
        ledger: &mut Ledger,
        previous: Option<Identity>,
        redirect_on_reject: bool,
    ) -> Option<Pending> {
        ledger.ticket += 1;

        let Some(token) = self.store.get() else {
            debug!("No stored credential");
            self.phase.send_replace(SessionPhase::Unauthenticated);
            return None;
        };

        self.phase.send_replace(SessionPhase::Resolving { previous });
        Some(Pending {
            ticket: ledger.ticket,
            credential: Credential::new(ledger.epoch, Some(token)),
            redirect_on_reject,
        })
    }

    async fn resolve(&self, pending: Option<Pending>) -> ClientResult<SessionState> {
        let Some(pending) = pending else {
            return Ok(self.state());
        };
        let Some(token) = pending.credential.token() else {
            return Ok(self.state());
        };

        debug!(
            "Resolving identity via {} (ticket {})",
            self.resolver.name(),
            pending.ticket
        );
        let outcome = self.resolver.resolve_identity(token).await;
        self.settle(&pending, outcome)
    }

    fn settle(
        &self,
        pending: &Pending,
        outcome: AuthErrorResult<Identity>,
    ) -> ClientResult<SessionState> {
        let revoked = {
            let mut ledger = self.ledger();

            if ledger.ticket != pending.ticket {
                debug!("Dropping superseded resolution (ticket {})", pending.ticket);
                return Ok(self.state());
            }

            match outcome {
                Ok(identity) => {
                    info!("Authenticated as {} (id {})", identity.username, identity.id);
                    self.phase
                        .send_replace(SessionPhase::Authenticated(identity));
                    return Ok(self.state());
                }
                Err(e) if e.revokes_credential() => {
                    warn!("Credential rejected by {} resolver: {e}", self.resolver.name());
                    let revoked = self.revoke(&mut ledger, pending.credential.epoch());
                    if !revoked {
                        self.phase.send_replace(SessionPhase::Unauthenticated);
                    }
                    revoked
                }
                Err(e) => {
                    warn!("Identity resolution failed, keeping credential: {e}");
                    let previous = self.user();
                    self.phase.send_replace(match previous {
                        Some(identity) => SessionPhase::Authenticated(identity),
                        None => SessionPhase::Unauthenticated,
                    });
                    return Err(ClientError::from(e));
                }
            }
        };

        if revoked && pending.redirect_on_reject {
            self.redirect_to_login();
        }
        Ok(self.state())
    }
}

impl CredentialSource for Session {
    fn credential(&self) -> Credential {
        let ledger = self.ledger();
        Credential::new(ledger.epoch, self.store.get())
    }

    fn reject(&self, credential: &Credential) {
        self.expire(credential);
    }
}
