//! Wire DTOs for the backend auth endpoints.
//!
//! DESIGN
//! ======
//! The backend owns these schemas; the client stores and forwards them.
//! Deserialization is tolerant of backend additions (unknown fields are
//! ignored) and of numeric identifiers, so schema drift degrades to the
//! defensive paths instead of hard parse failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the auth endpoints and persisted
/// across reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name, when the backend provides one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Success body of `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Body of `GET /api/auth/profile`; `user` is absent on malformed replies.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: Option<UserProfile>,
}

/// Error body shared by the auth endpoints.
///
/// The backend is inconsistent about the field name (`error` vs
/// `message`), so both are accepted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The server-provided message, whichever field carried it.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}
