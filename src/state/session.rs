//! Credential store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the single access/refresh token pair in memory and mirrors every
//! change to durable storage. Whoever issues authenticated requests holds the
//! session; hydration from storage happens once, in [`Session::restore`].
//!
//! Methods take `&self` so the controller and in-flight requests can share
//! one `Rc<Session<_>>` on the single browser thread.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::net::types::AuthTokens;
use crate::util::storage::KeyValueStorage;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Token pair in memory, backed by durable storage.
///
/// No token shape or expiry validation: any string is accepted, and an empty
/// access token means signed out.
pub struct Session<S> {
    storage: S,
    tokens: RefCell<AuthTokens>,
}

impl<S: KeyValueStorage> Session<S> {
    /// Create a session seeded from whatever `storage` already holds.
    pub fn restore(storage: S) -> Self {
        let tokens = AuthTokens {
            access_token: storage.get(ACCESS_TOKEN_KEY).unwrap_or_default(),
            refresh_token: storage.get(REFRESH_TOKEN_KEY).unwrap_or_default(),
        };
        Self { storage, tokens: RefCell::new(tokens) }
    }

    /// Replace both tokens in memory and in storage.
    pub fn set_tokens(&self, tokens: &AuthTokens) {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
        *self.tokens.borrow_mut() = tokens.clone();
    }

    /// Current access token, `""` when signed out.
    pub fn access_token(&self) -> String {
        self.tokens.borrow().access_token.clone()
    }

    /// Current refresh token, `""` when none is held.
    pub fn refresh_token(&self) -> String {
        self.tokens.borrow().refresh_token.clone()
    }

    /// Forget both tokens in memory and in storage.
    pub fn clear_tokens(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        *self.tokens.borrow_mut() = AuthTokens { access_token: String::new(), refresh_token: String::new() };
    }

    pub fn is_authenticated(&self) -> bool {
        !self.tokens.borrow().access_token.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
