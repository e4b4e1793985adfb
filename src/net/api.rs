//! REST API helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with human-readable messages instead of
//! panics, so auth failures degrade to inline messages or coded redirects
//! without crashing hydration. Server-provided error bodies are surfaced
//! when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ApiErrorBody;
use super::types::UserProfile;
#[cfg(feature = "hydrate")]
use super::types::{LoginResponse, ProfileResponse};

/// Profile-exchange endpoint consumed by the OAuth completion handler.
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile";
/// Password login endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/login";
/// Account registration endpoint.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
/// Change-password endpoint; requires a bearer token.
pub const CHANGE_PASSWORD_ENDPOINT: &str = "/api/change-password";
/// Identity-provider entry point, reached by full navigation rather than
/// an XHR call.
pub const GOOGLE_AUTH_URL: &str = "/api/auth/google";

/// Token and profile returned by a successful password login.
#[derive(Clone, Debug)]
pub struct LoginSuccess {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_fetch_failed_message(status: u16) -> String {
    format!("profile fetch failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn change_password_failed_message(status: u16) -> String {
    format!("password change failed: {status}")
}

/// Exchange a bearer token for the authenticated user's profile via
/// `GET /api/auth/profile`.
///
/// # Errors
///
/// Returns a diagnostic message on transport failure, a non-2xx status,
/// or a success body without a `user` object. The three cases are
/// deliberately collapsed for callers: each one is the same terminal
/// profile-fetch failure.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_fetch_failed_message(resp.status()));
        }
        let body: ProfileResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.user.ok_or_else(|| "profile response carried no user".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Password sign-in via `POST /api/login`.
///
/// # Errors
///
/// Returns the server's error message when the response carries one, or a
/// generic status/transport message otherwise.
pub async fn login(email: &str, password: &str) -> Result<LoginSuccess, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
            return Err(body.into_message().unwrap_or_else(|| login_failed_message(status)));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        match (body.token, body.user) {
            (Some(token), Some(user)) => Ok(LoginSuccess { token, user }),
            _ => Err("login response carried no credential".to_owned()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the server's error message when the response carries one, or a
/// generic status/transport message otherwise.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
            return Err(body.into_message().unwrap_or_else(|| register_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `POST /api/change-password`, reusing
/// the persisted bearer token.
///
/// # Errors
///
/// Returns the server's error message when the response carries one, or a
/// generic status/transport message otherwise.
pub async fn change_password(token: &str, current: &str, new: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "currentPassword": current, "newPassword": new });
        let resp = gloo_net::http::Request::post(CHANGE_PASSWORD_ENDPOINT)
            .header("Authorization", &bearer_header_value(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
            return Err(body.into_message().unwrap_or_else(|| change_password_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current, new);
        Err("not available on server".to_owned())
    }
}
