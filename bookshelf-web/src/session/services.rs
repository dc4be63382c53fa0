use async_trait::async_trait;
use shared::models::{CreatedUser, Credentials, NewUser, SessionUser};

use super::SessionError;

/// Exchanges credentials for an authenticated user.
#[async_trait(?Send)]
pub trait LoginService {
    async fn login(&self, credentials: &Credentials) -> Result<SessionUser, SessionError>;
}

/// Creates new accounts.
#[async_trait(?Send)]
pub trait UserService {
    async fn create(&self, new_user: &NewUser) -> Result<CreatedUser, SessionError>;
}

/// Holds the bearer token used by authenticated API calls.
pub trait TokenHolder {
    fn set_token(&self, token: &str);
}
