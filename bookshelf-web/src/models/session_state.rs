use std::rc::Rc;

use shared::models::{CreatedUser, SessionUser};
use strum::Display;
use yewdux::{Store, store::Reducer};

use crate::session::SessionError;

/// Notification shown for every failed login, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Lifecycle of the most recently started login or registration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The current user plus the outcome of the last session request.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub status: RequestStatus,
    pub notification: String,
    pub error: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Applies a single event. Side effects such as persistence happen in
    /// [`crate::session::SessionStore`] before the event is dispatched.
    pub fn transition(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::UserSet(user) => self.user = Some(user),
            SessionEvent::UserUnset => self.user = None,
            SessionEvent::StatusReset => {
                self.status = RequestStatus::Idle;
                self.notification.clear();
                self.error = false;
            }
            SessionEvent::Login(AsyncPhase::Pending)
            | SessionEvent::Register(AsyncPhase::Pending) => {
                self.status = RequestStatus::Loading;
            }
            SessionEvent::Login(AsyncPhase::Fulfilled(user)) => {
                self.status = RequestStatus::Succeeded;
                self.notification = format!("{} logged in", user.username);
                self.error = false;
                self.user = Some(user);
            }
            SessionEvent::Login(AsyncPhase::Rejected(_)) => {
                self.status = RequestStatus::Failed;
                self.notification = LOGIN_FAILED_MESSAGE.to_string();
                self.error = true;
            }
            SessionEvent::Register(AsyncPhase::Fulfilled(created)) => {
                self.status = RequestStatus::Succeeded;
                self.notification = format!("user {} created", created.username);
                self.error = false;
            }
            SessionEvent::Register(AsyncPhase::Rejected(err)) => {
                self.status = RequestStatus::Failed;
                self.notification = err.to_string();
                self.error = true;
            }
        }
    }
}

/// Observable phase of an asynchronous session request.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<T> {
    Pending,
    Fulfilled(T),
    Rejected(SessionError),
}

impl<T> From<Result<T, SessionError>> for AsyncPhase<T> {
    fn from(result: Result<T, SessionError>) -> Self {
        match result {
            Ok(value) => Self::Fulfilled(value),
            Err(err) => Self::Rejected(err),
        }
    }
}

/// Everything that can change [`SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    UserSet(SessionUser),
    UserUnset,
    StatusReset,
    Login(AsyncPhase<SessionUser>),
    Register(AsyncPhase<CreatedUser>),
}

impl Reducer<SessionState> for SessionEvent {
    fn apply(self, mut state: Rc<SessionState>) -> Rc<SessionState> {
        Rc::make_mut(&mut state).transition(self);
        state
    }
}
