//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful sign-in path (restore, password login, OAuth
//! completion) lands here via a full navigation, so this page always
//! starts from the restored session rather than in-page state. It guards
//! itself with the shared unauthenticated redirect and owns the logout
//! transition.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::settings_modal::SettingsModal;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Authenticated landing page with account controls.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session_signal, navigate);

    let show_settings = RwSignal::new(false);

    let display_name = move || {
        session_signal
            .get()
            .user
            .map(|user| user.name.unwrap_or(user.email))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::state::session::clear(&crate::util::storage::BrowserStorage);
            session_signal.set(SessionState::signed_out());
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <Show
            when=move || {
                let state = session_signal.get();
                !state.loading && state.user.is_some()
            }
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session_signal.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__brand">"Finance GPT"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{display_name}</span>
                    <button
                        class="btn toolbar__settings"
                        on:click=move |_| show_settings.set(true)
                        title="Settings"
                    >
                        "Settings"
                    </button>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <main class="dashboard-page__body">
                    <h1>{move || format!("Welcome back, {}", display_name())}</h1>
                    <p class="dashboard-page__hint">
                        "Ask anything about your finances to get started."
                    </p>
                </main>

                <Show when=move || show_settings.get()>
                    <SettingsModal show=show_settings/>
                </Show>
            </div>
        </Show>
    }
}
