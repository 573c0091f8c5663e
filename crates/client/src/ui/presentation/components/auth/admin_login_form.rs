//! Admin email/password login form.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::common::FormField;
use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts};
use crate::ui::routes::Route;

#[component]
pub fn AdminLoginForm() -> Element {
    let services = use_services();
    let mut auth_state = use_auth_state();
    let mut toasts = use_toasts();
    let navigator = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Reachability probe, same as the rider sign-in screen.
    let probe_services = services.clone();
    use_future(move || {
        let services = probe_services.clone();
        async move {
            if services.auth.health_check().await.is_err() {
                toasts.error("Cannot reach the server right now");
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let services = services.clone();
        spawn_task(async move {
            busy.set(true);
            match services.auth.admin_login(&email(), &password()).await {
                Ok(()) => {
                    auth_state.set_admin();
                    toasts.success("Signed in as admin");
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto p-6",
            h1 { class: "text-2xl font-bold mb-4", "Admin sign in" }
            form {
                onsubmit: on_submit,
                FormField {
                    label: "Email",
                    value: email,
                    input_type: "email",
                    placeholder: "ops@example.com",
                }
                FormField {
                    label: "Password",
                    value: password,
                    input_type: "password",
                }
                button {
                    class: "w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
