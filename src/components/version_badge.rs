//! Fixed footer badge with the build version.

#[cfg(test)]
#[path = "version_badge_test.rs"]
mod version_badge_test;

use leptos::prelude::*;

use crate::config::APP_VERSION;

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

#[component]
pub fn VersionBadge() -> impl IntoView {
    view! { <div class="version-display">{version_label()}</div> }
}
