//! Root application component with routing and the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is provided here and restored from localStorage
//! exactly once per page load, before any route guard is allowed to
//! redirect. Every sign-in flow leaves via a full navigation, so this
//! restore pass is how the rest of the application learns about a fresh
//! login.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::auth_success::AuthSuccessPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, runs the startup restore, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Loading stays true until the restore pass below has run, so route
    // guards cannot redirect off a not-yet-restored session.
    let session_signal = RwSignal::new(SessionState::restoring());
    provide_context(session_signal);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !session_signal.get_untracked().loading {
            return;
        }
        let next = match crate::state::session::restore(&crate::util::storage::BrowserStorage) {
            Some(user) => SessionState::signed_in(user),
            None => SessionState::signed_out(),
        };
        session_signal.set(next);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fgpt-client.css"/>
        <Title text="Finance GPT"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("success"))
                    view=AuthSuccessPage
                />
            </Routes>
        </Router>
    }
}
