use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The authenticated user as returned by the login endpoint and persisted
/// by the web client between page loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// The user's username.
    pub username: String,

    /// Backend identifier of the user.
    pub id: String,

    /// Bearer token for authenticated requests.
    pub token: String,
}

/// Username and password submitted to the login endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The user's username.
    pub username: String,

    /// The user's password.
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields carry a value.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_fields(&self.username, &self.password)
    }
}

/// Request to create a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// The requested username.
    pub username: String,

    /// The requested password.
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields carry a value.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_fields(&self.username, &self.password)
    }
}

/// Account record returned by the user-creation endpoint.
///
/// Registration does not log the user in, so no token is included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    /// The new user's username.
    pub username: String,

    /// Password hash echoed back by the backend.
    #[serde(default)]
    pub password_hash: String,

    /// Books owned by the account; empty on creation.
    #[serde(default)]
    pub books: Vec<serde_json::Value>,
}

fn require_fields(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "username" });
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField { field: "password" });
    }
    Ok(())
}
