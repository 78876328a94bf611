//! Sign-in / sign-up form.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::components::banner::{Banner, BannerKind};
use crate::state::update::Msg;
use crate::state::view::{FormMode, ViewState};

pub const PASSWORD_HINT: &str = "Password must be at least 8 characters with uppercase, lowercase, and number";

/// Static text for one form mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub switch_prompt: &'static str,
    pub switch_label: &'static str,
    pub password_autocomplete: &'static str,
}

pub fn form_copy(mode: FormMode) -> FormCopy {
    match mode {
        FormMode::SignIn => FormCopy {
            title: "Welcome back",
            subtitle: "Sign in to your account to continue",
            submit: "Sign In",
            submitting: "Signing in...",
            switch_prompt: "Don't have an account?",
            switch_label: "Sign up",
            password_autocomplete: "current-password",
        },
        FormMode::SignUp => FormCopy {
            title: "Create account",
            subtitle: "Sign up to get started with your account",
            submit: "Sign Up",
            submitting: "Signing up...",
            switch_prompt: "Already have an account?",
            switch_label: "Sign in",
            password_autocomplete: "new-password",
        },
    }
}

/// The email input takes focus when the form mounts and whenever this
/// value changes.
pub fn email_focus_key(state: &ViewState) -> FormMode {
    state.mode
}

pub fn submit_label(mode: FormMode, loading: bool) -> &'static str {
    let copy = form_copy(mode);
    if loading { copy.submitting } else { copy.submit }
}

#[component]
pub fn AuthFormPage(state: Signal<ViewState>, on_msg: Callback<Msg>) -> impl IntoView {
    let mode = Memo::new(move |_| state.with(|s| s.mode));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let copy = move || form_copy(mode.get());
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let success = Signal::derive(move || state.with(|s| s.success.clone()));
    let email_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    {
        let focus_key = Memo::new(move |_| state.with(email_focus_key));
        Effect::new(move |_| {
            focus_key.track();
            if let Some(input) = email_ref.get() {
                let _ = input.focus();
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_msg.run(Msg::Submit);
    };

    view! {
        <div class="auth-card">
            <div class="auth-header">
                <h1>{move || copy().title}</h1>
                <p class="auth-subtitle">{move || copy().subtitle}</p>
            </div>

            <form class="auth-form" data-mode=move || mode.get().as_str() on:submit=on_submit>
                <div class="form-group">
                    <label for="email" class="form-label">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class="form-input"
                        placeholder="Enter your email"
                        required=true
                        autocomplete="email"
                        node_ref=email_ref
                        prop:value=move || state.with(|s| s.email.clone())
                        disabled=move || loading.get()
                        on:input=move |ev| on_msg.run(Msg::EmailChanged(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="password" class="form-label">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        class="form-input"
                        placeholder="Enter your password"
                        required=true
                        autocomplete=move || copy().password_autocomplete
                        prop:value=move || state.with(|s| s.password.clone())
                        disabled=move || loading.get()
                        on:input=move |ev| on_msg.run(Msg::PasswordChanged(event_target_value(&ev)))
                    />
                    <Show when=move || mode.get() == FormMode::SignUp>
                        <div class="password-hint">{PASSWORD_HINT}</div>
                    </Show>
                </div>

                <Banner message=error kind=BannerKind::Error/>
                <Banner message=success kind=BannerKind::Success/>

                <button type="submit" class="auth-btn primary" disabled=move || loading.get()>
                    {move || submit_label(mode.get(), loading.get())}
                </button>
            </form>

            <div class="auth-switch">
                <p>
                    {move || copy().switch_prompt}
                    " "
                    <button
                        type="button"
                        class="switch-link"
                        disabled=move || loading.get()
                        on:click=move |_| on_msg.run(Msg::ToggleMode)
                    >
                        {move || copy().switch_label}
                    </button>
                </p>
            </div>
        </div>
    }
}
