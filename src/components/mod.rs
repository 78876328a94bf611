//! Reusable UI components shared by both screens.

pub mod banner;
pub mod version_badge;
