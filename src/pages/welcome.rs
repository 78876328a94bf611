//! Welcome screen shown to an authenticated user.
//!
//! Renders one of three panels from `WelcomeStatus`: a spinner while the
//! user record loads, the record itself, or an error with a way out.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::UserDetails;
use crate::state::update::Msg;
use crate::state::view::{Screen, ViewState, WelcomeStatus};
use crate::util::format::format_timestamp_ms;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch user details. You may need to sign in again.";

/// Label/value rows of the "Your Details" panel.
pub fn detail_rows(user: &UserDetails) -> [(&'static str, String); 3] {
    [
        ("User ID:", user.id.clone()),
        ("Email:", user.email.clone()),
        ("Member since:", format_timestamp_ms(user.created_at)),
    ]
}

fn welcome_status(state: &ViewState) -> Option<WelcomeStatus> {
    match &state.screen {
        Screen::Welcome(status) => Some(status.clone()),
        Screen::AuthForm => None,
    }
}

#[component]
pub fn WelcomePage(state: Signal<ViewState>, on_msg: Callback<Msg>) -> impl IntoView {
    let status = Memo::new(move |_| state.with(welcome_status));
    let on_sign_out = move |_| on_msg.run(Msg::SignOut);

    let panel = move || match status.get() {
        Some(WelcomeStatus::Ready(user)) => view! {
            <div class="success-icon">
                <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
                    <polyline points="22,4 12,14.01 9,11.01"></polyline>
                </svg>
            </div>
            <h1>"Welcome!"</h1>
            <p class="success-message">"You're successfully authenticated."</p>
            <div class="user-details">
                <h2>"Your Details"</h2>
                <div class="user-info">
                    {detail_rows(&user)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="info-item">
                                <span class="info-label">{label}</span>
                                <span class="info-value">{value}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
            <button type="button" class="auth-btn secondary" on:click=on_sign_out>"Sign Out"</button>
        }
        .into_any(),
        Some(WelcomeStatus::Failed(message)) => view! {
            <div class="error-icon">
                <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <circle cx="12" cy="12" r="10"></circle>
                    <line x1="15" y1="9" x2="9" y2="15"></line>
                    <line x1="9" y1="9" x2="15" y2="15"></line>
                </svg>
            </div>
            <h1>"Authentication Error"</h1>
            <p class="error-message">{FETCH_FAILED_MESSAGE}</p>
            <p class="error-detail">{message}</p>
            <button type="button" class="auth-btn secondary" on:click=on_sign_out>"Sign Out"</button>
        }
        .into_any(),
        Some(WelcomeStatus::Loading) | None => view! {
            <div class="loading-spinner">
                <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M21 12a9 9 0 11-6.219-8.56"></path>
                </svg>
            </div>
            <h1>"Loading..."</h1>
            <p class="loading-message">"Fetching your details..."</p>
        }
        .into_any(),
    };

    view! {
        <div class="auth-card">
            <div class="success-screen">{panel}</div>
        </div>
    }
}
