//! Application state: credentials, view data, reducer, and timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the tokens, `view` is the render input, `update` is the
//! reducer over it, and `timers` holds the scheduled banner/screen changes.

pub mod session;
pub mod timers;
pub mod update;
pub mod view;
