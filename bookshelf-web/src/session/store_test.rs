//! Tests for the session store
//!
//! Drives login, registration, logout and restore against in-memory
//! collaborators and checks state, persistence and token propagation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;
use shared::models::{CreatedUser, Credentials, NewUser, SessionUser};
use yewdux::{Context, Dispatch};

use super::*;
use crate::config::SESSION_STORAGE_KEY;
use crate::models::{RequestStatus, SessionState, session_state::LOGIN_FAILED_MESSAGE};

struct StubLogin {
    outcome: Result<SessionUser, SessionError>,
    observer: Dispatch<SessionState>,
    seen_status: Cell<Option<RequestStatus>>,
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl LoginService for StubLogin {
    async fn login(&self, _credentials: &Credentials) -> Result<SessionUser, SessionError> {
        self.calls.set(self.calls.get() + 1);
        self.seen_status.set(Some(self.observer.get().status));
        self.outcome.clone()
    }
}

struct StubUsers {
    outcome: Result<CreatedUser, SessionError>,
    received: RefCell<Vec<NewUser>>,
}

#[async_trait(?Send)]
impl UserService for StubUsers {
    async fn create(&self, new_user: &NewUser) -> Result<CreatedUser, SessionError> {
        self.received.borrow_mut().push(new_user.clone());
        self.outcome.clone()
    }
}

#[derive(Default)]
struct RecordingTokens {
    tokens: RefCell<Vec<String>>,
}

impl TokenHolder for RecordingTokens {
    fn set_token(&self, token: &str) {
        self.tokens.borrow_mut().push(token.to_string());
    }
}

struct Harness {
    store: SessionStore,
    login: Rc<StubLogin>,
    users: Rc<StubUsers>,
    tokens: Rc<RecordingTokens>,
    storage: Rc<MemoryStorage>,
}

impl Harness {
    fn new(
        login: Result<SessionUser, SessionError>,
        users: Result<CreatedUser, SessionError>,
    ) -> Self {
        let dispatch = Dispatch::<SessionState>::new(&Context::new());
        let login = Rc::new(StubLogin {
            outcome: login,
            observer: dispatch.clone(),
            seen_status: Cell::new(None),
            calls: Cell::new(0),
        });
        let users = Rc::new(StubUsers {
            outcome: users,
            received: RefCell::new(Vec::new()),
        });
        let tokens = Rc::new(RecordingTokens::default());
        let storage = Rc::new(MemoryStorage::new());
        let services = SessionServices {
            login: login.clone(),
            users: users.clone(),
            tokens: tokens.clone(),
            storage: storage.clone(),
        };
        Self {
            store: SessionStore::new(dispatch, services, SESSION_STORAGE_KEY),
            login,
            users,
            tokens,
            storage,
        }
    }

    fn succeeding() -> Self {
        Self::new(Ok(alice()), Ok(bob_created()))
    }

    fn persisted_user(&self) -> Option<SessionUser> {
        self.storage
            .get_item(SESSION_STORAGE_KEY)
            .map(|raw| serde_json::from_str(&raw).expect("persisted user is valid JSON"))
    }
}

fn alice() -> SessionUser {
    SessionUser {
        username: "alice".to_string(),
        id: "1".to_string(),
        token: "t1".to_string(),
    }
}

fn bob_created() -> CreatedUser {
    CreatedUser {
        username: "bob".to_string(),
        password_hash: "$2b$10$hash".to_string(),
        books: Vec::new(),
    }
}

#[test]
fn login_success_sets_user_persists_and_forwards_token() {
    let harness = Harness::succeeding();

    block_on(harness.store.login(Credentials::new("alice", "secret")));

    let state = harness.store.state();
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.status.to_string(), "succeeded");
    assert_eq!(state.notification, "alice logged in");
    assert!(!state.error);
    assert_eq!(harness.persisted_user(), Some(alice()));
    assert_eq!(*harness.tokens.tokens.borrow(), vec!["t1".to_string()]);
}

#[test]
fn login_passes_through_loading() {
    let harness = Harness::succeeding();
    assert_eq!(harness.store.state().status, RequestStatus::Idle);

    block_on(harness.store.login(Credentials::new("alice", "secret")));

    assert_eq!(harness.login.seen_status.get(), Some(RequestStatus::Loading));
    assert_eq!(harness.store.state().status, RequestStatus::Succeeded);
}

#[test]
fn login_failure_uses_generic_message() {
    for cause in [
        SessionError::Rejected("invalid username or password".to_string()),
        SessionError::Network("connection refused".to_string()),
        SessionError::Decode("expected value".to_string()),
    ] {
        let harness = Harness::new(Err(cause), Ok(bob_created()));

        block_on(harness.store.login(Credentials::new("alice", "wrong")));

        let state = harness.store.state();
        assert_eq!(state.status.to_string(), "failed");
        assert!(state.error);
        assert_eq!(state.notification, LOGIN_FAILED_MESSAGE);
        assert_eq!(state.user, None);
        assert!(harness.storage.is_empty());
        assert!(harness.tokens.tokens.borrow().is_empty());
    }
}

#[test]
fn login_with_blank_credentials_skips_service() {
    let harness = Harness::succeeding();

    block_on(harness.store.login(Credentials::new("", "secret")));

    assert_eq!(harness.login.calls.get(), 0);
    let state = harness.store.state();
    assert_eq!(state.status, RequestStatus::Failed);
    assert_eq!(state.notification, LOGIN_FAILED_MESSAGE);
}

#[test]
fn register_success_leaves_user_untouched() {
    let harness = Harness::succeeding();
    harness.store.set_user(alice());

    block_on(harness.store.register(NewUser::new("bob", "hunter2")));

    let state = harness.store.state();
    assert_eq!(state.status.to_string(), "succeeded");
    assert_eq!(state.notification, "user bob created");
    assert_eq!(state.user, Some(alice()));
    assert_eq!(
        *harness.users.received.borrow(),
        vec![NewUser::new("bob", "hunter2")]
    );
}

#[test]
fn register_failure_surfaces_service_message() {
    let harness = Harness::new(
        Ok(alice()),
        Err(SessionError::Rejected("username taken".to_string())),
    );

    block_on(harness.store.register(NewUser::new("bob", "hunter2")));

    let state = harness.store.state();
    assert_eq!(state.status.to_string(), "failed");
    assert!(state.error);
    assert_eq!(state.notification, "username taken");
}

#[test]
fn register_with_blank_password_reports_validation() {
    let harness = Harness::succeeding();

    block_on(harness.store.register(NewUser::new("bob", "")));

    assert!(harness.users.received.borrow().is_empty());
    assert_eq!(harness.store.state().notification, "password must not be empty");
}

#[test]
fn unset_user_wipes_all_storage() {
    let harness = Harness::succeeding();
    harness.storage.set_item("theme", "dark").unwrap();
    harness.store.set_user(alice());

    harness.store.unset_user();

    assert_eq!(harness.store.state().user, None);
    assert!(harness.storage.is_empty());
}

#[test]
fn unset_user_without_session_is_harmless() {
    let harness = Harness::succeeding();
    harness.store.unset_user();
    assert_eq!(harness.store.state().user, None);
    assert!(harness.storage.is_empty());
}

#[test]
fn reset_status_keeps_user() {
    let harness = Harness::new(
        Ok(alice()),
        Err(SessionError::Rejected("username taken".to_string())),
    );
    harness.store.set_user(alice());
    block_on(harness.store.register(NewUser::new("bob", "hunter2")));

    harness.store.reset_status();

    let state = harness.store.state();
    assert_eq!(state.status.to_string(), "idle");
    assert_eq!(state.notification, "");
    assert!(!state.error);
    assert_eq!(state.user, Some(alice()));
}

#[test]
fn set_user_roundtrips_through_storage() {
    let harness = Harness::succeeding();

    harness.store.set_user(alice());

    assert_eq!(harness.persisted_user(), Some(alice()));
    assert_eq!(harness.store.state().user, Some(alice()));
    assert_eq!(*harness.tokens.tokens.borrow(), vec!["t1".to_string()]);
}

#[test]
fn restore_reinstates_persisted_user() {
    let harness = Harness::succeeding();
    let json = serde_json::to_string(&alice()).unwrap();
    harness.storage.set_item(SESSION_STORAGE_KEY, &json).unwrap();

    assert_eq!(harness.store.restore(), Some(alice()));
    assert_eq!(harness.store.state().user, Some(alice()));
    assert_eq!(*harness.tokens.tokens.borrow(), vec!["t1".to_string()]);
}

#[test]
fn restore_ignores_corrupt_entry() {
    let harness = Harness::succeeding();
    harness
        .storage
        .set_item(SESSION_STORAGE_KEY, "{not json")
        .unwrap();

    assert_eq!(harness.store.restore(), None);
    assert_eq!(*harness.store.state(), SessionState::default());
    assert!(harness.tokens.tokens.borrow().is_empty());
}

#[test]
fn restore_without_entry_does_nothing() {
    let harness = Harness::succeeding();
    assert_eq!(harness.store.restore(), None);
    assert_eq!(harness.store.state().user, None);
}

#[test]
fn clones_share_state() {
    let harness = Harness::succeeding();
    let other = harness.store.clone();

    other.set_user(alice());

    assert_eq!(harness.store.state().user, Some(alice()));
    assert!(harness.store == other);
}
