use super::*;

// =============================================================
// UserProfile deserialization
// =============================================================

#[test]
fn user_profile_parses_string_id() {
    let user: UserProfile =
        serde_json::from_str(r#"{"id":"u-1","email":"a@b.com","name":"Alice"}"#).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name.as_deref(), Some("Alice"));
}

#[test]
fn user_profile_parses_numeric_id() {
    let user: UserProfile = serde_json::from_str(r#"{"id":42,"email":"a@b.com"}"#).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.name, None);
}

#[test]
fn user_profile_tolerates_unknown_fields() {
    let user: UserProfile =
        serde_json::from_str(r#"{"id":"u-1","email":"a@b.com","plan":"pro","created_at":0}"#)
            .unwrap();
    assert_eq!(user.id, "u-1");
}

#[test]
fn user_profile_rejects_missing_email() {
    let result = serde_json::from_str::<UserProfile>(r#"{"id":"u-1"}"#);
    assert!(result.is_err());
}

#[test]
fn user_profile_round_trips_through_json() {
    let user = UserProfile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        name: Some("Alice".to_owned()),
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: UserProfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// Response envelopes
// =============================================================

#[test]
fn profile_response_without_user_parses_as_none() {
    let body: ProfileResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
    assert!(body.user.is_none());
}

#[test]
fn login_response_carries_token_and_user() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"token":"t-1","user":{"id":"u-1","email":"a@b.com"}}"#).unwrap();
    assert_eq!(body.token.as_deref(), Some("t-1"));
    assert!(body.user.is_some());
}

#[test]
fn api_error_body_prefers_error_over_message() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"error":"bad credentials","message":"nope"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("bad credentials"));
}

#[test]
fn api_error_body_falls_back_to_message() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("nope"));
}

#[test]
fn api_error_body_empty_is_none() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.into_message(), None);
}
