use super::*;

#[test]
fn auth_tokens_decode_from_api_body() {
    let tokens: AuthTokens = serde_json::from_str(r#"{"access_token":"t1","refresh_token":"r1"}"#).unwrap();
    assert_eq!(tokens, AuthTokens { access_token: "t1".to_owned(), refresh_token: "r1".to_owned() });
}

#[test]
fn auth_tokens_ignore_extra_fields() {
    let tokens: AuthTokens =
        serde_json::from_str(r#"{"access_token":"a","refresh_token":"b","expires_in":900}"#).unwrap();
    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.refresh_token, "b");
}

#[test]
fn credentials_serialize_email_and_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "Abcdef12".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "Abcdef12"}));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "Abcdef12".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("Abcdef12"));
}

#[test]
fn refresh_request_serializes_token() {
    let json = serde_json::to_value(RefreshRequest { refresh_token: "r1" }).unwrap();
    assert_eq!(json, serde_json::json!({"refresh_token": "r1"}));
}

#[test]
fn user_details_accept_integer_timestamp() {
    let user: UserDetails =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","created_at":1700000000000}"#).unwrap();
    assert_eq!(user.created_at, 1_700_000_000_000);
}

#[test]
fn user_details_accept_integral_float_timestamp() {
    let user: UserDetails =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","created_at":1700000000000.0}"#).unwrap();
    assert_eq!(user.created_at, 1_700_000_000_000);
}

#[test]
fn user_details_reject_string_timestamp() {
    let result = serde_json::from_str::<UserDetails>(r#"{"id":"u1","email":"a@b.com","created_at":"yesterday"}"#);
    assert!(result.is_err());
}

#[test]
fn user_details_reject_fractional_timestamp() {
    let result = serde_json::from_str::<UserDetails>(r#"{"id":"u1","email":"a@b.com","created_at":1.5}"#);
    assert!(result.is_err());
}
