//! Sign-up form: password account creation plus OAuth entry points.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::common::FormField;
use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts};
use crate::ui::routes::Route;
use gotogether_shared::SignUpRequest;

#[component]
pub fn SignUpForm() -> Element {
    let services = use_services();
    let mut auth_state = use_auth_state();
    let mut toasts = use_toasts();
    let navigator = use_navigator();

    let name = use_signal(String::new);
    let phone = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // OAuth is a plain page navigation: the server owns the provider
    // handshake and redirects back with a token.
    let google_url = services.auth.oauth_signup_url("google");

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let services = services.clone();
        spawn_task(async move {
            busy.set(true);
            let email_value = email();
            let name_value = name();
            let request = SignUpRequest {
                phone: phone().trim().to_string(),
                email: (!email_value.trim().is_empty()).then(|| email_value.trim().to_string()),
                password: password(),
                name: (!name_value.trim().is_empty()).then(|| name_value.trim().to_string()),
            };
            match services.auth.signup(request).await {
                Ok(user) => {
                    toasts.success(format!("Welcome, {}", user.display_name()));
                    auth_state.set_user(user);
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
            h1 { class: "text-2xl font-bold mb-4", "Create your account" }

            form {
                onsubmit: on_submit,
                FormField {
                    label: "Name",
                    value: name,
                    placeholder: "Asha",
                }
                FormField {
                    label: "Phone number",
                    value: phone,
                    input_type: "tel",
                    placeholder: "+919876543210",
                }
                FormField {
                    label: "Email (optional)",
                    value: email,
                    input_type: "email",
                }
                FormField {
                    label: "Password",
                    value: password,
                    input_type: "password",
                    placeholder: "At least 8 characters",
                }
                button {
                    class: "w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account…" } else { "Sign up" }
                }
            }

            div {
                class: "mt-4 text-center",
                p { class: "text-sm text-gray-500 mb-2", "or" }
                a {
                    class: "block w-full border border-gray-300 rounded p-2 text-sm hover:bg-gray-100",
                    href: "{google_url}",
                    "Continue with Google"
                }
            }

            p {
                class: "text-sm text-gray-600 mt-4",
                "Already have an account? "
                Link { class: "text-blue-600 underline", to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}
