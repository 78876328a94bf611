//! # authgate
//!
//! Leptos + WASM authentication front-end: a sign-in / sign-up form, token
//! storage, and a welcome screen that fetches the signed-in user's details.
//!
//! ARCHITECTURE
//! ============
//! `state::session` owns the token pair, `net::api` talks to the remote auth
//! API, and `state::update` is a pure reducer over `state::view::ViewState`.
//! `runtime::Controller` executes the reducer's effects and owns the timers;
//! `browser` drives the controller from real time and fetch results, and
//! `app` renders `pages` from the view signal it publishes.

pub mod app;
#[cfg(feature = "csr")]
mod browser;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod runtime;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Install browser logging and mount the application into `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
