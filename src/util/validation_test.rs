use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_simple_addresses() {
    for email in ["a@b.com", "first.last@example.co.uk", "x+tag@sub.domain.io", "ü@ß.de"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@b.com",
        "a@",
        "a@b",
        "a@b.",
        "a@.com.",
        "a b@c.com",
        "a@b c.com",
        "a@@b.com",
        "a@b@c.com",
        "a@b.com\n",
    ] {
        assert!(!is_valid_email(email), "{email:?}");
    }
}

// =============================================================
// is_strong_password
// =============================================================

#[test]
fn accepts_password_with_all_classes() {
    assert!(is_strong_password("Abcdef12"));
    assert!(is_strong_password("zzzzZZZ9!"));
}

#[test]
fn rejects_short_password() {
    assert!(!is_strong_password("Abcde12"));
}

#[test]
fn rejects_missing_character_classes() {
    assert!(!is_strong_password("abcdefg1"));
    assert!(!is_strong_password("ABCDEFG1"));
    assert!(!is_strong_password("Abcdefgh"));
}

#[test]
fn rejects_line_breaks() {
    assert!(!is_strong_password("Abcdef12\n"));
    assert!(!is_strong_password("Abcd\r\nef12"));
}

#[test]
fn non_ascii_letters_do_not_count_as_cases() {
    assert!(!is_strong_password("ÄÖÜäöü12"));
}

#[test]
fn length_counts_utf16_units() {
    // U+1F600 is two UTF-16 code units.
    assert!(is_strong_password("Ab1\u{1F600}\u{1F600}x"));
    assert!(!is_strong_password("Ab1\u{1F600}x"));
}

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_trims_email_and_keeps_password() {
    let creds = validate_credentials("  a@b.com ", " Abcdef12").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " Abcdef12");
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "Abcdef12"), Err(EMPTY_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("a@b.com", ""), Err(EMPTY_FIELDS_MESSAGE));
}

#[test]
fn validate_checks_email_before_password() {
    assert_eq!(validate_credentials("nope", "short"), Err(INVALID_EMAIL_MESSAGE));
}

#[test]
fn validate_rejects_weak_password() {
    assert_eq!(validate_credentials("a@b.com", "password"), Err(WEAK_PASSWORD_MESSAGE));
}

#[test]
fn byte_order_mark_is_whitespace_in_emails() {
    assert!(!is_valid_email("a\u{FEFF}b@c.com"));
    assert!(!is_valid_email("a@c\u{FEFF}d.com"));
}

#[test]
fn validate_trims_byte_order_mark_around_email() {
    let credentials = validate_credentials("\u{FEFF} a@b.com\u{FEFF}", "Abcdef12").unwrap();
    assert_eq!(credentials.email, "a@b.com");
}
