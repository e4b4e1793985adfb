use super::*;

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("tok-1"), "Bearer tok-1");
}

#[test]
fn profile_fetch_failed_message_formats_status() {
    assert_eq!(profile_fetch_failed_message(401), "profile fetch failed: 401");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(403), "login failed: 403");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "registration failed: 409");
}

#[test]
fn change_password_failed_message_formats_status() {
    assert_eq!(change_password_failed_message(400), "password change failed: 400");
}

#[test]
fn endpoints_are_backend_relative() {
    assert_eq!(PROFILE_ENDPOINT, "/api/auth/profile");
    assert_eq!(LOGIN_ENDPOINT, "/api/login");
    assert_eq!(REGISTER_ENDPOINT, "/api/auth/register");
    assert_eq!(CHANGE_PASSWORD_ENDPOINT, "/api/change-password");
    assert_eq!(GOOGLE_AUTH_URL, "/api/auth/google");
}
