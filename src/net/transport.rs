//! HTTP transport seam for the auth API client.
//!
//! Client-side (csr): real fetch calls via `gloo-net`.
//! Tests substitute a stub so request/response handling runs natively.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A JSON request against the auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, bearer: None, body: None }
    }

    pub fn post_json(url: String, body: String) -> Self {
        Self { method: Method::Post, url, bearer: None, body: Some(body) }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response. Enables stubbing in tests.
///
/// Futures are `?Send`: browser fetch futures are bound to the JS thread.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = match request.body {
            Some(body) => builder.body(body).map_err(|e| ApiError::Transport(e.to_string()))?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
