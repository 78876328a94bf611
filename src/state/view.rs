//! View state for the two screens of the front-end.
//!
//! DESIGN
//! ======
//! Everything the UI renders is derived from [`ViewState`], so any screen can
//! be reproduced from plain data in tests. Mutation happens only in
//! `state::update`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::UserDetails;

/// Which auth operation the form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

impl FormMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Stable identifier, matching the form's `data-mode` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Successfully signed in!",
            Self::SignUp => "Successfully signed up!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in failed",
            Self::SignUp => "Sign up failed",
        }
    }
}

/// Progress of the user-details fetch on the welcome screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WelcomeStatus {
    Loading,
    Ready(UserDetails),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    AuthForm,
    Welcome(WelcomeStatus),
}

/// Complete render input for the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub mode: FormMode,
    /// A sign-in/sign-up request is in flight; the form is disabled.
    pub loading: bool,
    pub email: String,
    pub password: String,
    /// Transient error banner text.
    pub error: Option<String>,
    /// Transient success banner text.
    pub success: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::AuthForm,
            mode: FormMode::SignIn,
            loading: false,
            email: String::new(),
            password: String::new(),
            error: None,
            success: None,
        }
    }
}

impl ViewState {
    /// Starting state: the welcome screen (still loading) for a returning
    /// user, otherwise the sign-in form.
    pub fn initial(authenticated: bool) -> Self {
        let screen = if authenticated { Screen::Welcome(WelcomeStatus::Loading) } else { Screen::AuthForm };
        Self { screen, ..Self::default() }
    }

    pub fn is_auth_form(&self) -> bool {
        matches!(self.screen, Screen::AuthForm)
    }

    pub fn is_welcome_loading(&self) -> bool {
        matches!(self.screen, Screen::Welcome(WelcomeStatus::Loading))
    }
}
