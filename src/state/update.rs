//! Reducer for the auth front-end.
//!
//! The runtime calls `update(state, msg)` and executes the returned effects.
//! This is the only place `ViewState` changes; it never performs I/O.

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;

use std::time::Duration;

use super::view::{FormMode, Screen, ViewState, WelcomeStatus};
use crate::net::types::{AuthTokens, Credentials, UserDetails};
use crate::util::validation::validate_credentials;

/// How long the error banner stays up.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);
/// How long the success banner stays up.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);
/// Delay between a successful sign-in and the welcome screen.
pub const WELCOME_DELAY: Duration = Duration::from_secs(1);

/// Events fed into the reducer by the UI, request completions, and timers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    ToggleMode,
    SignOut,
    AuthSucceeded { mode: FormMode, tokens: AuthTokens },
    AuthFailed { mode: FormMode, message: String },
    ShowWelcome,
    UserLoaded(UserDetails),
    UserFailed(String),
    HideError,
    HideSuccess,
}

/// Network operations requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Authenticate { mode: FormMode, credentials: Credentials },
    FetchUserDetails,
}

/// Named timers; scheduling one again replaces the pending one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    HideError,
    HideSuccess,
    ShowWelcome,
}

impl Timer {
    pub const ALL: [Timer; 3] = [Timer::HideError, Timer::HideSuccess, Timer::ShowWelcome];

    /// Message dispatched when the timer fires.
    pub fn message(self) -> Msg {
        match self {
            Self::HideError => Msg::HideError,
            Self::HideSuccess => Msg::HideSuccess,
            Self::ShowWelcome => Msg::ShowWelcome,
        }
    }
}

/// Side effects for the runtime to execute after an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Request(ApiCall),
    StoreTokens(AuthTokens),
    ClearTokens,
    Schedule { timer: Timer, after: Duration },
    Cancel(Timer),
}

/// Effects that accompany [`ViewState::initial`].
pub fn initial_effects(state: &ViewState) -> Vec<Effect> {
    if state.is_welcome_loading() { vec![Effect::Request(ApiCall::FetchUserDetails)] } else { vec![] }
}

/// Apply `msg` to `state` and return the effects to run.
pub fn update(state: &mut ViewState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::EmailChanged(email) => {
            if state.is_auth_form() && !state.loading {
                state.email = email;
            }
            vec![]
        }
        Msg::PasswordChanged(password) => {
            if state.is_auth_form() && !state.loading {
                state.password = password;
            }
            vec![]
        }
        Msg::Submit => handle_submit(state),
        Msg::ToggleMode => {
            if !state.is_auth_form() {
                return vec![];
            }
            state.mode = state.mode.toggled();
            clear_banners(state)
        }
        Msg::AuthSucceeded { mode, tokens } => {
            state.loading = false;
            state.email.clear();
            state.password.clear();
            let mut effects = vec![Effect::StoreTokens(tokens)];
            effects.extend(show_success(state, mode.success_message()));
            effects.push(Effect::Schedule { timer: Timer::ShowWelcome, after: WELCOME_DELAY });
            effects
        }
        Msg::AuthFailed { mode, message } => {
            state.loading = false;
            let message = if message.is_empty() { mode.failure_message().to_owned() } else { message };
            show_error(state, message)
        }
        Msg::ShowWelcome => {
            if !state.is_auth_form() {
                return vec![];
            }
            state.screen = Screen::Welcome(WelcomeStatus::Loading);
            vec![Effect::Request(ApiCall::FetchUserDetails)]
        }
        Msg::UserLoaded(user) => {
            if state.is_welcome_loading() {
                state.screen = Screen::Welcome(WelcomeStatus::Ready(user));
            }
            vec![]
        }
        Msg::UserFailed(message) => {
            if state.is_welcome_loading() {
                state.screen = Screen::Welcome(WelcomeStatus::Failed(message));
            }
            vec![]
        }
        Msg::SignOut => {
            *state = ViewState::default();
            let mut effects = vec![Effect::ClearTokens];
            effects.extend(Timer::ALL.into_iter().map(Effect::Cancel));
            effects
        }
        Msg::HideError => {
            state.error = None;
            vec![]
        }
        Msg::HideSuccess => {
            state.success = None;
            vec![]
        }
    }
}

fn handle_submit(state: &mut ViewState) -> Vec<Effect> {
    if state.loading || !state.is_auth_form() {
        return vec![];
    }
    match validate_credentials(&state.email, &state.password) {
        Ok(credentials) => {
            state.loading = true;
            vec![Effect::Request(ApiCall::Authenticate { mode: state.mode, credentials })]
        }
        Err(message) => show_error(state, message.to_owned()),
    }
}

fn show_error(state: &mut ViewState, message: String) -> Vec<Effect> {
    state.error = Some(message);
    vec![Effect::Schedule { timer: Timer::HideError, after: ERROR_BANNER_TTL }]
}

fn show_success(state: &mut ViewState, message: &str) -> Vec<Effect> {
    state.success = Some(message.to_owned());
    vec![Effect::Schedule { timer: Timer::HideSuccess, after: SUCCESS_BANNER_TTL }]
}

fn clear_banners(state: &mut ViewState) -> Vec<Effect> {
    state.error = None;
    state.success = None;
    vec![Effect::Cancel(Timer::HideError), Effect::Cancel(Timer::HideSuccess)]
}
