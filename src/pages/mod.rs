//! Top-level screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render a `ViewState` signal and report user intent as `Msg` values
//! through a callback. They hold no state of their own.

pub mod auth_form;
pub mod welcome;
