//! Auth form input validation.
//!
//! Runs before any network call; a failure is shown as a transient banner and
//! the submit is dropped. Password strength is checked on both sign-in and
//! sign-up.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::Credentials;

pub const EMPTY_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const WEAK_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters with uppercase, lowercase, and number";

/// Minimum password length in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid"));

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
/// The byte order mark counts as whitespace, as it does in browser forms.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least [`MIN_PASSWORD_LEN`] characters on one line, with an ASCII
/// lowercase letter, an ASCII uppercase letter, and an ASCII digit.
pub fn is_strong_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
        && !password.chars().any(is_line_terminator)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Validate raw form input; the email is trimmed, the password is not.
///
/// # Errors
///
/// Returns the banner message for the first failing rule.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim_matches(is_form_whitespace);
    if email.is_empty() || password.is_empty() {
        return Err(EMPTY_FIELDS_MESSAGE);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL_MESSAGE);
    }
    if !is_strong_password(password) {
        return Err(WEAK_PASSWORD_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}
