//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route components should apply identical unauthenticated
//! redirect behavior, and none of them may redirect while the startup
//! restore is still running.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// True when the startup restore has finished and no user is signed in.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.loading && session.user.is_none()
}

/// Redirect to `/login` whenever the session has loaded with no user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
