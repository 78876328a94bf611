//! Transient error/success banner inside the auth form.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Success => "success-message",
        }
    }

    /// Errors interrupt assistive tech; successes are announced politely.
    pub fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success => "status",
        }
    }
}

/// Visible only while `message` holds text.
#[component]
pub fn Banner(#[prop(into)] message: Signal<Option<String>>, kind: BannerKind) -> impl IntoView {
    let visible = move || message.with(|m| m.as_deref().is_some_and(|text| !text.is_empty()));

    view! {
        <Show when=visible>
            <div class=kind.class() role=kind.role()>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
