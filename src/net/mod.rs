//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the four auth operations, `transport` is the HTTP seam,
//! `types` defines the JSON schema, and `error` the shared failure type.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
