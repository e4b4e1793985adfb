//! Login page supporting password sign-in and Google OAuth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Also the landing spot for failed OAuth rounds: the completion handler
//! redirects here with an `error` query parameter, which is surfaced as a
//! human-readable message and then stripped from the address bar so a
//! reload does not re-show a stale failure.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::GOOGLE_AUTH_URL;

/// Map an OAuth failure code from the query string to display copy.
///
/// Provider codes are not enumerable, so anything unrecognized gets the
/// generic provider-failure message.
#[cfg(any(test, feature = "hydrate"))]
fn oauth_error_message(code: &str) -> &'static str {
    match code {
        "no_token" => "Sign-in did not return a credential. Please try again.",
        "profile_fetch_failed" => "We could not load your account after sign-in. Please try again.",
        _ => "Google authentication failed. Please try again.",
    }
}

/// Validate the password-login form. Returns trimmed email + password.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page with a password form and a Google OAuth entry point.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_error = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session_signal = expect_context::<RwSignal<crate::state::session::SessionState>>();

    // Surface a completion-handler error code left in the query string,
    // then strip it from the address bar.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let query = window.location().search().unwrap_or_default();
        if let Some(code) = crate::util::query::non_empty_param(&query, "error") {
            message.set(oauth_error_message(&code).to_owned());
            is_error.set(true);
            let path = window.location().pathname().unwrap_or_else(|_| "/login".to_owned());
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    message.set(msg.to_owned());
                    is_error.set(true);
                    return;
                }
            };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(outcome) => {
                        let store = crate::util::storage::BrowserStorage;
                        crate::state::session::store_token(&store, &outcome.token);
                        crate::state::session::commit(&store, &outcome.user);
                        session_signal
                            .set(crate::state::session::SessionState::signed_in(outcome.user));
                        message.set("Login successful!".to_owned());
                        is_error.set(false);
                        if let Some(w) = web_sys::window() {
                            let _ = w
                                .location()
                                .set_href(crate::pages::auth_success::DASHBOARD_URL);
                        }
                    }
                    Err(e) => {
                        message.set(e);
                        is_error.set(true);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(GOOGLE_AUTH_URL);
            }
        }
    };

    view! {
        <div class="login-page">
            <a class="login-page__brand" href="/">
                "Finance GPT"
            </a>
            <div class="login-card">
                <h2>"Welcome Back"</h2>
                <p class="login-card__subtitle">
                    "Don't have an account? " <a href="/signup">"Sign Up"</a>
                </p>
                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if is_error.get() {
                            "login-message login-message--error"
                        } else {
                            "login-message login-message--success"
                        }
                    }>{move || message.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider">"OR"</div>
                <a href=GOOGLE_AUTH_URL class="login-button login-button--google" on:click=on_google>
                    "Continue with Google"
                </a>
            </div>
        </div>
    }
}
