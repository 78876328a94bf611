//! Root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the `ViewState` signal, installs the browser driver that feeds
//! it, and picks the page for the current screen.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::version_badge::VersionBadge;
use crate::config::AppConfig;
use crate::pages::auth_form::AuthFormPage;
use crate::pages::welcome::WelcomePage;
use crate::state::update::Msg;
use crate::state::view::ViewState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::default());
    let on_msg = install_driver(&AppConfig::from_env(), view_state);
    let state: Signal<ViewState> = view_state.into();
    let on_auth_form = Memo::new(move |_| view_state.with(ViewState::is_auth_form));

    view! {
        <Title text="Authgate"/>
        <div class="auth-container">
            <Show
                when=move || on_auth_form.get()
                fallback=move || view! { <WelcomePage state=state on_msg=on_msg/> }
            >
                <AuthFormPage state=state on_msg=on_msg/>
            </Show>
        </div>
        <VersionBadge/>
    }
}

#[cfg(feature = "csr")]
fn install_driver(config: &AppConfig, view_state: RwSignal<ViewState>) -> Callback<Msg> {
    crate::browser::install(config, view_state)
}

/// Without a browser there is nothing to drive; the form renders inert.
#[cfg(not(feature = "csr"))]
fn install_driver(config: &AppConfig, _view_state: RwSignal<ViewState>) -> Callback<Msg> {
    log::debug!("no browser driver for {}", config.api_url);
    Callback::new(|_msg: Msg| {})
}
