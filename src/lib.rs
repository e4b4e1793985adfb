//! # fgpt-client
//!
//! Leptos + WASM frontend for the Finance GPT assistant.
//!
//! The authentication/session core lives in [`state::session`] (persisted
//! identity with defensive restore) and [`pages::auth_success`] (the
//! OAuth completion handler); the login, signup, and dashboard pages are
//! the surfaces that drive it. All backend access goes through
//! [`net::api`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
