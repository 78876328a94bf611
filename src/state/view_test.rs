use super::*;

#[test]
fn default_is_empty_sign_in_form() {
    let state = ViewState::default();
    assert_eq!(state.screen, Screen::AuthForm);
    assert_eq!(state.mode, FormMode::SignIn);
    assert!(!state.loading);
    assert!(state.email.is_empty());
    assert!(state.password.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state.success, None);
}

#[test]
fn initial_unauthenticated_shows_form() {
    let state = ViewState::initial(false);
    assert!(state.is_auth_form());
    assert_eq!(state.mode, FormMode::SignIn);
}

#[test]
fn initial_authenticated_shows_loading_welcome() {
    let state = ViewState::initial(true);
    assert!(state.is_welcome_loading());
    assert!(!state.is_auth_form());
}

#[test]
fn form_mode_toggles_both_ways() {
    assert_eq!(FormMode::SignIn.toggled(), FormMode::SignUp);
    assert_eq!(FormMode::SignUp.toggled(), FormMode::SignIn);
}

#[test]
fn form_mode_identifiers() {
    assert_eq!(FormMode::SignIn.as_str(), "signin");
    assert_eq!(FormMode::SignUp.as_str(), "signup");
}

#[test]
fn form_mode_messages() {
    assert_eq!(FormMode::SignIn.success_message(), "Successfully signed in!");
    assert_eq!(FormMode::SignUp.success_message(), "Successfully signed up!");
    assert_eq!(FormMode::SignIn.failure_message(), "Sign in failed");
    assert_eq!(FormMode::SignUp.failure_message(), "Sign up failed");
}
