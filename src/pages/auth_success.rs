//! OAuth completion page: consumes the redirect-back URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider redirects here with either a one-time `token` or
//! an `error` query parameter. This route is the only code path allowed
//! to consume that token: it exchanges it for a profile, commits the
//! session, and leaves via a full navigation so every route re-reads the
//! persisted session instead of trusting in-page state.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal and lands on `/login?error=<code>`; nothing
//! here retries. The token persisted ahead of the exchange is removed
//! again on failure so no credential outlives a failed sign-in, and a
//! result that resolves after the route deactivates is discarded without
//! committing or navigating.

#[cfg(test)]
#[path = "auth_success_test.rs"]
mod auth_success_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::UserProfile;
#[cfg(feature = "hydrate")]
use crate::state::session::{self, SessionState};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::query::non_empty_param;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage::KeyValueStore;

/// Authenticated landing route targeted after a successful exchange.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const DASHBOARD_URL: &str = "/dashboard";

/// Classification of the redirect-back query parameters.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CompletionParams {
    /// The provider reported a failure code.
    ProviderError(String),
    /// No usable token came back.
    MissingToken,
    /// A one-time token ready to exchange.
    Token(String),
}

/// Classify `window.location.search` for the completion flow.
///
/// A provider error wins over a token when both appear; empty parameter
/// values count as absent.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_completion_params(query: &str) -> CompletionParams {
    if let Some(code) = non_empty_param(query, "error") {
        CompletionParams::ProviderError(code)
    } else if let Some(token) = non_empty_param(query, "token") {
        CompletionParams::Token(token)
    } else {
        CompletionParams::MissingToken
    }
}

/// Terminal failure kinds for the completion flow.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CompletionFailure {
    /// The identity provider reported a failure code.
    Provider(String),
    /// The redirect carried no token.
    MissingToken,
    /// The profile exchange failed: transport, status, or body shape.
    ProfileFetch(String),
}

#[cfg(any(test, feature = "hydrate"))]
impl CompletionFailure {
    /// Error code carried to the login page for user-facing display.
    pub(crate) fn redirect_code(&self) -> &str {
        match self {
            Self::Provider(code) => code,
            Self::MissingToken => "no_token",
            Self::ProfileFetch(_) => "profile_fetch_failed",
        }
    }
}

/// `/login?error=<code>` target for a terminal completion failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_error_url(code: &str) -> String {
    format!("/login?error={}", urlencoding::encode(code))
}

/// Drop the provisional token after a failed exchange so a failed sign-in
/// leaves no credential behind.
#[cfg(any(test, feature = "hydrate"))]
fn discard_failed_token(store: &impl KeyValueStore) {
    store.remove(crate::state::session::TOKEN_KEY);
}

/// Run the one-shot token exchange against the current page URL.
///
/// Persists the token before the fetch so later API calls can reuse it.
/// Reports the outcome only; committing the session and navigating stay
/// with the page component.
#[cfg(feature = "hydrate")]
async fn complete_sign_in(
    store: &impl KeyValueStore,
    query: &str,
) -> Result<UserProfile, CompletionFailure> {
    match parse_completion_params(query) {
        CompletionParams::ProviderError(code) => {
            leptos::logging::error!("oauth sign-in failed: {code}");
            Err(CompletionFailure::Provider(code))
        }
        CompletionParams::MissingToken => {
            leptos::logging::warn!("oauth redirect carried no token");
            Err(CompletionFailure::MissingToken)
        }
        CompletionParams::Token(token) => {
            session::store_token(store, &token);
            match crate::net::api::fetch_profile(&token).await {
                Ok(user) => Ok(user),
                Err(err) => {
                    leptos::logging::error!("profile exchange failed: {err}");
                    discard_failed_token(store);
                    Err(CompletionFailure::ProfileFetch(err))
                }
            }
        }
    }
}

/// Completion page shown while the token exchange is in flight.
///
/// Renders an indefinite progress indicator: the single fetch has no
/// client-side timeout, so a hung request holds this screen until the
/// transport gives up or the user navigates away.
#[component]
pub fn AuthSuccessPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let session_signal = expect_context::<RwSignal<SessionState>>();

        // Liveness flag tied to this activation; a stale result arriving
        // after cleanup must not commit or navigate.
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let query = web_sys::window()
                .map(|w| w.location().search().unwrap_or_default())
                .unwrap_or_default();
            let store = crate::util::storage::BrowserStorage;
            let outcome = complete_sign_in(&store, &query).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match outcome {
                Ok(user) => {
                    session::commit(&store, &user);
                    session_signal.set(SessionState::signed_in(user));
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href(DASHBOARD_URL);
                    }
                }
                Err(failure) => {
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href(&login_error_url(failure.redirect_code()));
                    }
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="auth-success-page">
            <div class="auth-success-page__card">
                <div class="auth-success-page__spinner" aria-hidden="true"></div>
                <p>"Completing sign-in..."</p>
            </div>
        </div>
    }
}
