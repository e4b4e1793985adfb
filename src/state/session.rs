//! Session state and persistence for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Route guards and
//! user-aware components read the `SessionState` signal provided from the
//! app root; the login, signup, and OAuth-completion flows write it
//! through `commit`/`clear`.
//!
//! PERSISTENCE
//! ===========
//! The session mirrors into three localStorage entries: the bearer token,
//! the JSON-serialized profile, and a login flag holding the literal
//! string `"true"`. localStorage writes are not transactional across
//! keys, so `restore` treats any partial or unparsable group as corrupt
//! and wipes it rather than failing startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;
use crate::util::storage::KeyValueStore;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// localStorage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "fgpt_user";
/// localStorage key holding `"true"` while a session is committed.
pub const LOGIN_FLAG_KEY: &str = "fgpt_isLoggedIn";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
    /// True until the startup restore pass has run.
    pub loading: bool,
}

impl SessionState {
    /// Initial state shown while the startup restore is still pending.
    pub fn restoring() -> Self {
        Self { user: None, authenticated: false, loading: true }
    }

    /// State for a signed-in user.
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user), authenticated: true, loading: false }
    }

    /// State after a restore miss or a logout.
    pub fn signed_out() -> Self {
        Self { user: None, authenticated: false, loading: false }
    }
}

/// Restore a persisted session from `store`.
///
/// Succeeds only when the login flag reads `"true"` and the stored
/// profile parses. Any other combination of the two entries is treated as
/// a torn or corrupt write: the whole persisted group is cleared and
/// `None` is returned. Bad persisted data never propagates an error out
/// of startup.
pub fn restore(store: &impl KeyValueStore) -> Option<UserProfile> {
    let flag = store.get(LOGIN_FLAG_KEY);
    let raw_user = store.get(USER_KEY);

    match (flag.as_deref(), raw_user) {
        (Some("true"), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("clearing corrupt persisted session: {err}");
                clear(store);
                None
            }
        },
        (None, None) => None,
        _ => {
            // Flag without profile or profile without flag: torn write.
            clear(store);
            None
        }
    }
}

/// Persist `profile` and the login flag as one logical group.
///
/// The caller is responsible for flipping the in-memory signal to the
/// signed-in state; validation beyond presence belongs to the auth flow
/// that produced the profile.
pub fn commit(store: &impl KeyValueStore, profile: &UserProfile) {
    match serde_json::to_string(profile) {
        Ok(raw) => {
            store.set(USER_KEY, &raw);
            store.set(LOGIN_FLAG_KEY, "true");
        }
        Err(err) => {
            // Leaves the previous entries untouched rather than writing a
            // partial group.
            leptos::logging::error!("failed to serialize user profile: {err}");
        }
    }
}

/// Remove every persisted session entry. Safe to call when already empty.
pub fn clear(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    store.remove(LOGIN_FLAG_KEY);
}

/// Persist the bearer token for reuse by later authenticated calls.
pub fn store_token(store: &impl KeyValueStore, token: &str) {
    store.set(TOKEN_KEY, token);
}

/// Read the persisted bearer token, if any.
pub fn stored_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY)
}
