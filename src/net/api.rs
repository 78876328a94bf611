//! REST client for the remote auth API.
//!
//! Every operation is a single JSON request/response round trip. Operations
//! that need a token read it from the [`Session`] and fail before sending
//! when it is missing.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Http`] with the server's `message`
//! when it sent one. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, MISSING_ACCESS_TOKEN, MISSING_REFRESH_TOKEN, http_error_message};
use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use super::types::{AuthTokens, Credentials, RefreshRequest, UserDetails};
use crate::state::session::Session;
use crate::util::storage::KeyValueStorage;

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const SIGN_UP_PATH: &str = "/auth/signup";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const CURRENT_USER_PATH: &str = "/users/me";

/// Auth API client bound to one base URL.
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// Exchange credentials for a token pair via `POST /auth/signin`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// malformed token body.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.post(SIGN_IN_PATH, credentials).await
    }

    /// Register an account and receive a token pair via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::sign_in`].
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.post(SIGN_UP_PATH, credentials).await
    }

    /// Mint a new token pair from the session's refresh token and store it
    /// back into the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when the
    /// session has no refresh token; otherwise as [`ApiClient::sign_in`].
    pub async fn refresh_token<S: KeyValueStorage>(&self, session: &Session<S>) -> Result<AuthTokens, ApiError> {
        let refresh_token = session.refresh_token();
        if refresh_token.is_empty() {
            return Err(ApiError::MissingToken(MISSING_REFRESH_TOKEN));
        }
        let tokens: AuthTokens = self
            .post(REFRESH_PATH, &RefreshRequest { refresh_token: &refresh_token })
            .await?;
        session.set_tokens(&tokens);
        Ok(tokens)
    }

    /// Fetch the signed-in user's profile via `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when the
    /// session is signed out; otherwise as [`ApiClient::sign_in`].
    pub async fn get_user_details<S: KeyValueStorage>(&self, session: &Session<S>) -> Result<UserDetails, ApiError> {
        let access_token = session.access_token();
        if access_token.is_empty() {
            return Err(ApiError::MissingToken(MISSING_ACCESS_TOKEN));
        }
        let request = HttpRequest::get(self.endpoint(CURRENT_USER_PATH)).with_bearer(&access_token);
        decode_response(self.transport.send(request).await?)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::Transport(format!("failed to encode request: {e}")))?;
        let request = HttpRequest::post_json(self.endpoint(path), body);
        decode_response(self.transport.send(request).await?)
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn decode_response<R: DeserializeOwned>(resp: HttpResponse) -> Result<R, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Http { status: resp.status, message: http_error_message(resp.status, &resp.body) });
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
