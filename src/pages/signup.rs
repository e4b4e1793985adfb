//! Signup page creating a password account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration does not sign the user in: a successful request shows a
//! confirmation and hands off to the login page after a short delay.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::api::GOOGLE_AUTH_URL;

/// Validate the signup form. Returns trimmed name/email plus the password
/// verbatim.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Signup page with a registration form and a Google OAuth entry point.
#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_error = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_signup_input(&name.get(), &email.get(), &password.get()) {
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
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&name_value, &email_value, &password_value).await {
                Ok(()) => {
                    message.set("Account created successfully! Redirecting to login...".to_owned());
                    is_error.set(false);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href("/login");
                    }
                }
                Err(e) => {
                    message.set(e);
                    is_error.set(true);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
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
                <h2>"Create Your Account"</h2>
                <p class="login-card__subtitle">
                    "Already have an account? " <a href="/login">"Sign In"</a>
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
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Jane Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
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
