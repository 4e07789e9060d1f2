use super::support::{CountingStore, Outcome, ScriptedResolver, identity};
use crate::{CredentialSource, ErrorKind, RecordingNavigator, Route, Session, SessionPhase};

use mm_auth::{CredentialStore, MemoryCredentialStore};

use std::sync::Arc;

struct Fixture {
    store: Arc<CountingStore>,
    resolver: Arc<ScriptedResolver>,
    navigator: Arc<RecordingNavigator>,
    session: Arc<Session>,
}

fn fixture(store: CountingStore, resolver: ScriptedResolver) -> Fixture {
    let store = Arc::new(store);
    let resolver = Arc::new(resolver);
    let navigator = Arc::new(RecordingNavigator::new());
    let session = Arc::new(Session::new(
        store.clone(),
        resolver.clone(),
        navigator.clone(),
    ));
    Fixture {
        store,
        resolver,
        navigator,
        session,
    }
}

async fn wait_until_resolving(session: &Session) {
    let mut phases = session.subscribe();
    phases
        .wait_for(|phase| phase.is_loading())
        .await
        .expect("session dropped");
}

// =========================================================================
// init
// =========================================================================

#[tokio::test]
async fn given_empty_store_when_init_then_unauthenticated_and_not_loading() {
    let f = fixture(CountingStore::default(), ScriptedResolver::new());

    let state = f.session.init().await.unwrap();

    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(f.session.phase(), SessionPhase::Unauthenticated);
    assert_eq!(f.resolver.calls(), 0);
}

#[tokio::test]
async fn given_valid_stored_token_when_init_then_authenticated() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );

    let state = f.session.init().await.unwrap();

    assert!(state.is_authenticated);
    assert_eq!(state.user.unwrap().id, 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn given_rejected_stored_token_when_init_then_store_cleared_and_unauthenticated() {
    let f = fixture(
        CountingStore::with_token("stale"),
        ScriptedResolver::new().with("stale", Outcome::Revoke),
    );

    let state = f.session.init().await.unwrap();

    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert_eq!(f.store.get(), None);
    assert!(f.navigator.routes().is_empty());
}

#[tokio::test]
async fn given_backend_unavailable_when_init_then_token_kept_and_error_returned() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Unavailable),
    );

    let result = f.session.init().await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(f.store.get().as_deref(), Some("abc"));
    assert!(!f.session.state().is_authenticated);
    assert!(!f.session.state().loading);
}

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn given_login_when_resolution_succeeds_then_user_matches_resolved_identity() {
    let f = fixture(
        CountingStore::default(),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );

    let state = f.session.login("abc").await.unwrap();

    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().id, 1);
    assert_eq!(state.user.unwrap().username, "joe");
    assert_eq!(f.store.get().as_deref(), Some("abc"));
}

#[tokio::test]
async fn given_login_when_resolution_pending_then_not_authenticated_and_loading() {
    let resolver = ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe")));
    resolver.gate("abc");
    let f = fixture(CountingStore::default(), resolver);

    let session = f.session.clone();
    let login = tokio::spawn(async move { session.login("abc").await });
    wait_until_resolving(&f.session).await;

    let during = f.session.state();
    assert!(during.loading);
    assert!(!during.is_authenticated);
    assert!(during.user.is_none());

    f.resolver.release("abc");
    let after = login.await.unwrap().unwrap();
    assert!(after.is_authenticated);
    assert!(!after.loading);
}

#[tokio::test]
async fn given_login_over_existing_session_when_pending_then_previous_user_hidden() {
    let resolver = ScriptedResolver::new()
        .with("old", Outcome::Resolve(identity(1, "joe")))
        .with("new", Outcome::Resolve(identity(2, "ann")));
    resolver.gate("new");
    let f = fixture(CountingStore::with_token("old"), resolver);
    f.session.init().await.unwrap();

    let session = f.session.clone();
    let login = tokio::spawn(async move { session.login("new").await });
    wait_until_resolving(&f.session).await;

    assert!(!f.session.state().is_authenticated);

    f.resolver.release("new");
    let state = login.await.unwrap().unwrap();
    assert_eq!(state.user.unwrap().id, 2);
}

#[tokio::test]
async fn given_invalid_token_when_login_then_store_cleared_and_unauthenticated() {
    let f = fixture(
        CountingStore::default(),
        ScriptedResolver::new().with("garbage", Outcome::Revoke),
    );

    let state = f.session.login("garbage").await.unwrap();

    assert!(!state.is_authenticated);
    assert_eq!(f.store.get(), None);
}

#[tokio::test]
async fn given_two_logins_when_first_resolves_last_then_newest_wins() {
    let resolver = ScriptedResolver::new()
        .with("first", Outcome::Resolve(identity(1, "joe")))
        .with("second", Outcome::Resolve(identity(2, "ann")));
    resolver.gate("first");
    let f = fixture(CountingStore::default(), resolver);

    let session = f.session.clone();
    let first = tokio::spawn(async move { session.login("first").await });
    wait_until_resolving(&f.session).await;

    let second = f.session.login("second").await.unwrap();
    assert_eq!(second.user.as_ref().unwrap().id, 2);

    f.resolver.release("first");
    first.await.unwrap().unwrap();

    let state = f.session.state();
    assert_eq!(state.user.unwrap().id, 2);
    assert_eq!(f.store.get().as_deref(), Some("second"));
}

// =========================================================================
// logout
// =========================================================================

#[tokio::test]
async fn given_authenticated_session_when_logout_then_store_empty_and_landing() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();

    f.session.logout().unwrap();

    assert_eq!(f.store.get(), None);
    assert!(!f.session.state().is_authenticated);
    assert_eq!(f.navigator.last(), Some(Route::Landing));
}

#[tokio::test]
async fn given_unresolved_session_when_logout_twice_then_idempotent() {
    let f = fixture(CountingStore::with_token("abc"), ScriptedResolver::new());

    f.session.logout().unwrap();
    f.session.logout().unwrap();

    assert_eq!(f.store.get(), None);
    assert_eq!(f.session.phase(), SessionPhase::Unauthenticated);
    assert_eq!(f.navigator.count(Route::Landing), 2);
}

#[tokio::test]
async fn given_resolution_in_flight_when_logout_then_late_result_is_dropped() {
    let resolver = ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe")));
    resolver.gate("abc");
    let f = fixture(CountingStore::with_token("abc"), resolver);

    let session = f.session.clone();
    let init = tokio::spawn(async move { session.init().await });
    wait_until_resolving(&f.session).await;

    f.session.logout().unwrap();
    f.resolver.release("abc");
    init.await.unwrap().unwrap();

    assert!(!f.session.state().is_authenticated);
    assert_eq!(f.store.get(), None);
}

// =========================================================================
// fetch_user
// =========================================================================

#[tokio::test]
async fn given_authenticated_session_when_fetch_user_pending_then_previous_user_visible() {
    let resolver = ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe")));
    let f = fixture(CountingStore::with_token("abc"), resolver);
    f.session.init().await.unwrap();
    f.resolver.gate("abc");
    f.resolver
        .set("abc", Outcome::Resolve(identity(1, "joseph")));

    let session = f.session.clone();
    let refresh = tokio::spawn(async move { session.fetch_user().await });
    wait_until_resolving(&f.session).await;

    let during = f.session.state();
    assert!(during.loading);
    assert!(during.is_authenticated);
    assert_eq!(during.user.unwrap().username, "joe");

    f.resolver.release("abc");
    let after = refresh.await.unwrap().unwrap();
    assert_eq!(after.user.unwrap().username, "joseph");
}

#[tokio::test]
async fn given_authenticated_session_when_fetch_user_fails_transiently_then_user_kept() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    f.resolver.set("abc", Outcome::Unavailable);

    let result = f.session.fetch_user().await;

    assert!(result.is_err());
    let state = f.session.state();
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(f.store.get().as_deref(), Some("abc"));
}

#[tokio::test]
async fn given_authenticated_session_when_fetch_user_rejected_then_cleared_and_redirected_once() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    f.resolver.set("abc", Outcome::Revoke);

    let state = f.session.fetch_user().await.unwrap();

    assert!(!state.is_authenticated);
    assert_eq!(f.store.get(), None);
    assert_eq!(f.store.clears(), 1);
    assert_eq!(f.navigator.count(Route::Login), 1);
}

#[tokio::test]
async fn given_fetch_user_rejected_when_request_rejection_arrives_later_then_one_redirect() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    let in_flight = f.session.credential();
    f.resolver.set("abc", Outcome::Revoke);

    f.session.fetch_user().await.unwrap();
    let expired = f.session.expire(&in_flight);

    assert!(!expired);
    assert_eq!(f.store.clears(), 1);
    assert_eq!(f.navigator.count(Route::Login), 1);
}

#[tokio::test]
async fn given_fetch_user_pending_when_request_rejected_first_then_one_redirect() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    f.resolver.set("abc", Outcome::Revoke);
    f.resolver.gate("abc");

    let session = f.session.clone();
    let refresh = tokio::spawn(async move { session.fetch_user().await });
    wait_until_resolving(&f.session).await;

    let expired = f.session.expire(&f.session.credential());
    f.resolver.release("abc");
    let state = refresh.await.unwrap().unwrap();

    assert!(expired);
    assert!(!state.is_authenticated);
    assert_eq!(f.store.clears(), 1);
    assert_eq!(f.navigator.count(Route::Login), 1);
}

// =========================================================================
// expire
// =========================================================================

#[tokio::test]
async fn given_concurrent_rejections_of_same_credential_then_one_clear_and_one_redirect() {
    let f = fixture(
        CountingStore::with_token("abc"),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    let credential = f.session.credential();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = f.session.clone();
            let credential = credential.clone();
            tokio::spawn(async move { session.expire(&credential) })
        })
        .collect();
    let mut expired = 0;
    for handle in handles {
        if handle.await.unwrap() {
            expired += 1;
        }
    }

    assert_eq!(expired, 1);
    assert_eq!(f.store.clears(), 1);
    assert_eq!(f.navigator.count(Route::Login), 1);
    assert!(!f.session.state().is_authenticated);
}

#[tokio::test]
async fn given_rejection_of_credential_replaced_by_login_then_ignored() {
    let f = fixture(
        CountingStore::with_token("old"),
        ScriptedResolver::new()
            .with("old", Outcome::Resolve(identity(1, "joe")))
            .with("new", Outcome::Resolve(identity(1, "joe"))),
    );
    f.session.init().await.unwrap();
    let stale = f.session.credential();

    f.session.login("new").await.unwrap();
    let expired = f.session.expire(&stale);

    assert!(!expired);
    assert_eq!(f.store.get().as_deref(), Some("new"));
    assert!(f.session.state().is_authenticated);
    assert!(f.navigator.routes().is_empty());
}

#[test]
fn given_stored_token_when_credential_read_then_token_and_epoch_returned() {
    let session = Session::new(
        Arc::new(MemoryCredentialStore::with_token("abc")),
        Arc::new(ScriptedResolver::new()),
        Arc::new(RecordingNavigator::new()),
    );

    let credential = session.credential();

    assert_eq!(credential.token(), Some("abc"));
    assert_eq!(credential.epoch(), 0);
    assert!(!format!("{credential:?}").contains("abc"));
}

// =========================================================================
// dispose / subscribe
// =========================================================================

#[tokio::test]
async fn given_resolution_in_flight_when_disposed_then_unresolved_and_result_dropped() {
    let resolver = ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe")));
    resolver.gate("abc");
    let f = fixture(CountingStore::with_token("abc"), resolver);

    let session = f.session.clone();
    let init = tokio::spawn(async move { session.init().await });
    wait_until_resolving(&f.session).await;

    f.session.dispose();
    f.resolver.release("abc");
    init.await.unwrap().unwrap();

    assert_eq!(f.session.phase(), SessionPhase::Unresolved);
    assert_eq!(f.store.get().as_deref(), Some("abc"));
}

#[tokio::test]
async fn given_subscriber_when_login_completes_then_sees_authenticated_phase() {
    let f = fixture(
        CountingStore::default(),
        ScriptedResolver::new().with("abc", Outcome::Resolve(identity(1, "joe"))),
    );
    let mut phases = f.session.subscribe();

    f.session.login("abc").await.unwrap();

    assert!(phases.has_changed().unwrap());
    let phase = phases.borrow_and_update().clone();
    assert_eq!(phase, SessionPhase::Authenticated(identity(1, "joe")));
}
