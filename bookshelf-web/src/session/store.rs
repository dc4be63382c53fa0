use std::rc::Rc;

use shared::models::{Credentials, NewUser, SessionUser};
use yewdux::Dispatch;

use super::{KeyValueStore, LoginService, SessionError, TokenHolder, UserService};
use crate::models::{AsyncPhase, SessionEvent, SessionState};

/// Collaborators the session store drives.
pub struct SessionServices {
    pub login: Rc<dyn LoginService>,
    pub users: Rc<dyn UserService>,
    pub tokens: Rc<dyn TokenHolder>,
    pub storage: Rc<dyn KeyValueStore>,
}

/// Handle to the user session.
///
/// Every state change is dispatched as a [`SessionEvent`] into the yewdux
/// context the handle was built from, so components selecting on
/// [`SessionState`] re-render. Persistence and token propagation happen here
/// before the matching event is dispatched. Clones share state and
/// collaborators.
#[derive(Clone)]
pub struct SessionStore {
    dispatch: Dispatch<SessionState>,
    services: Rc<SessionServices>,
    storage_key: Rc<str>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services) && self.storage_key == other.storage_key
    }
}

impl SessionStore {
    pub fn new(
        dispatch: Dispatch<SessionState>,
        services: SessionServices,
        storage_key: impl Into<Rc<str>>,
    ) -> Self {
        Self {
            dispatch,
            services: Rc::new(services),
            storage_key: storage_key.into(),
        }
    }

    /// Current snapshot of the session state.
    pub fn state(&self) -> Rc<SessionState> {
        self.dispatch.get()
    }

    /// Makes `user` the current user, persisting it and handing its token to
    /// the API client.
    pub fn set_user(&self, user: SessionUser) {
        self.remember(&user);
        self.dispatch.apply(SessionEvent::UserSet(user));
    }

    /// Logs out. Wipes all durable storage, not only the session entry.
    pub fn unset_user(&self) {
        self.services.storage.clear();
        self.dispatch.apply(SessionEvent::UserUnset);
        log::info!("session cleared");
    }

    pub fn reset_status(&self) {
        self.dispatch.apply(SessionEvent::StatusReset);
    }

    /// Reinstates a user persisted by an earlier page load.
    ///
    /// Returns `None` when nothing usable is stored; a corrupt entry is
    /// logged and left in place.
    pub fn restore(&self) -> Option<SessionUser> {
        let raw = self.services.storage.get_item(&self.storage_key)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => {
                log::info!("restored session for {}", user.username);
                self.set_user(user.clone());
                Some(user)
            }
            Err(err) => {
                log::warn!("ignoring unreadable session entry: {err}");
                None
            }
        }
    }

    /// Authenticates and, on success, makes the returned user current.
    ///
    /// Failures of any kind end up as the same generic notification; the
    /// cause is only logged.
    pub async fn login(&self, credentials: Credentials) {
        self.dispatch.apply(SessionEvent::Login(AsyncPhase::Pending));

        let result = match credentials.validate() {
            Ok(()) => self.services.login.login(&credentials).await,
            Err(err) => Err(SessionError::from(err)),
        };

        match &result {
            Ok(user) => {
                self.remember(user);
                log::info!("{} logged in", user.username);
            }
            Err(err) => log::debug!("login for {:?} failed: {err}", credentials.username),
        }

        self.dispatch.apply(SessionEvent::Login(result.into()));
    }

    /// Creates an account. Does not log the new user in.
    pub async fn register(&self, new_user: NewUser) {
        self.dispatch.apply(SessionEvent::Register(AsyncPhase::Pending));

        let result = match new_user.validate() {
            Ok(()) => self.services.users.create(&new_user).await,
            Err(err) => Err(SessionError::from(err)),
        };

        match &result {
            Ok(created) => log::info!("created user {}", created.username),
            Err(err) => log::warn!("registration for {:?} failed: {err}", new_user.username),
        }

        self.dispatch.apply(SessionEvent::Register(result.into()));
    }

    fn remember(&self, user: &SessionUser) {
        let persisted = serde_json::to_string(user)
            .map_err(SessionError::from)
            .and_then(|json| self.services.storage.set_item(&self.storage_key, &json));
        if let Err(err) = persisted {
            log::warn!("failed to persist session for {}: {err}", user.username);
        }
        self.services.tokens.set_token(&user.token);
    }
}
