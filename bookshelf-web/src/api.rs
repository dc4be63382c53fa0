use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use shared::models::{CreatedUser, Credentials, ErrorResponse, NewUser, SessionUser};
use std::sync::{Arc, Mutex};

use crate::session::{LoginService, SessionError, TokenHolder, UserService};

/// Lightweight API client for Bookshelf web interactions.
#[derive(Clone, Debug)]
pub struct LibraryClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl LibraryClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value for authenticated requests, once a
    /// token has been set.
    pub fn authorization(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SessionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.api_url(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SessionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SessionError::Rejected(rejection_message(status, &body)))
    }
}

#[async_trait(?Send)]
impl LoginService for LibraryClient {
    async fn login(&self, credentials: &Credentials) -> Result<SessionUser, SessionError> {
        self.post_json("login", credentials).await
    }
}

#[async_trait(?Send)]
impl UserService for LibraryClient {
    async fn create(&self, new_user: &NewUser) -> Result<CreatedUser, SessionError> {
        self.post_json("users", new_user).await
    }
}

impl TokenHolder for LibraryClient {
    fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(format!("Bearer {token}"));
        }
    }
}

/// Message for a non-success response: the backend's error text when the
/// body carries one, otherwise the status code.
pub(crate) fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| format!("Request failed with status code {}", status.as_u16()),
        |error| error.message,
    )
}
