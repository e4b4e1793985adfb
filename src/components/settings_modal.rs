//! Account settings dialog with the change-password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The change-password call is the one place outside the auth flows that
//! reuses the persisted bearer token, so a missing token surfaces as a
//! session-expired message instead of a request.

#[cfg(test)]
#[path = "settings_modal_test.rs"]
mod settings_modal_test;

use leptos::prelude::*;

/// Validate the change-password form against the local rules; the server
/// still checks the current password.
fn validate_change_password(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill in all password fields.");
    }
    if new != confirm {
        return Err("New passwords do not match");
    }
    if new.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Modal dialog for account settings.
#[component]
pub fn SettingsModal(show: RwSignal<bool>) -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let is_error = RwSignal::new(false);

    let on_close = Callback::new(move |_| show.set(false));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) =
            validate_change_password(&current.get(), &new_password.get(), &confirm.get())
        {
            message.set(msg.to_owned());
            is_error.set(true);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let current_value = current.get();
            let new_value = new_password.get();
            leptos::task::spawn_local(async move {
                let store = crate::util::storage::BrowserStorage;
                let Some(token) = crate::state::session::stored_token(&store) else {
                    message.set("Your session has expired. Please sign in again.".to_owned());
                    is_error.set(true);
                    return;
                };
                match crate::net::api::change_password(&token, &current_value, &new_value).await {
                    Ok(()) => {
                        message.set("Password changed successfully!".to_owned());
                        is_error.set(false);
                        current.set(String::new());
                        new_password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(e) => {
                        message.set(e);
                        is_error.set(true);
                    }
                }
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Settings"</h2>
                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if is_error.get() {
                            "dialog__message dialog__message--error"
                        } else {
                            "dialog__message dialog__message--success"
                        }
                    }>{move || message.get()}</p>
                </Show>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Current Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || current.get()
                            on:input=move |ev| current.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Confirm New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Change Password"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
