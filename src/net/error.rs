//! Error type shared by the transport and the auth API client.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries a display message the view can show as-is. HTTP
//! errors keep the status so callers can tell auth failures apart.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const MISSING_ACCESS_TOKEN: &str = "No access token available";
pub const MISSING_REFRESH_TOKEN: &str = "No refresh token available";

/// Status reported for a request that needed a token the session lacks.
const UNAUTHORIZED: u16 = 401;

/// Error returned by [`crate::net::api::ApiClient`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The session holds no token for a request that requires one. No
    /// request was sent.
    #[error("{0}")]
    MissingToken(&'static str),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),
    /// A 2xx response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for this error, with missing tokens reported as 401.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingToken(_) => Some(UNAUTHORIZED),
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}

/// Best-effort message for a non-2xx response: the body's `message` field
/// when it holds a non-empty string, a non-zero number, or `true`; otherwise
/// a generic status line.
pub fn http_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(message_text))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn message_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}
