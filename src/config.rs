//! Front-end configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so the API base URL is captured
//! from `AUTHGATE_API_URL` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Version string shown in the footer badge.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `AUTHGATE_API_URL`: default `http://localhost:8080`
    pub fn from_env() -> Self {
        Self::from_value(option_env!("AUTHGATE_API_URL"))
    }

    /// Build config from a raw API URL value; unset or blank falls back to
    /// [`DEFAULT_API_URL`].
    pub fn from_value(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_owned();
        Self { api_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
