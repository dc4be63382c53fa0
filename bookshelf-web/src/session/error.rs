use shared::models::ValidationError;
use thiserror::Error;

/// Failure of a session request or of one of its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The backend refused the request; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("unable to reach server: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
