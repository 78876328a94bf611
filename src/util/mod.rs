//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure input rules
//! from page and state logic to improve reuse and testability.

pub mod format;
pub mod storage;
pub mod validation;
