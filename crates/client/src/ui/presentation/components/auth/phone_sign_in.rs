//! Phone OTP sign-in
//!
//! Two-step wizard: request a code for an E.164 phone number, then verify
//! it. The `request_id` returned by the first step travels with the
//! verify call so the server can match the code to the request.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::common::FormField;
use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts};
use crate::ui::routes::Route;

#[derive(Clone, PartialEq)]
enum Step {
    EnterPhone,
    EnterOtp { request_id: String },
}

#[component]
pub fn PhoneSignIn() -> Element {
    let services = use_services();
    let mut auth_state = use_auth_state();
    let mut toasts = use_toasts();
    let navigator = use_navigator();

    let phone = use_signal(String::new);
    let otp = use_signal(String::new);
    let mut step = use_signal(|| Step::EnterPhone);
    let mut busy = use_signal(|| false);

    // Reachability probe: warn before the user types a number into a
    // form that cannot submit anywhere.
    let probe_services = services.clone();
    use_future(move || {
        let services = probe_services.clone();
        async move {
            if services.auth.health_check().await.is_err() {
                toasts.error("Cannot reach the server right now");
            }
        }
    });

    let request_services = services.clone();
    let on_request = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let services = request_services.clone();
        spawn_task(async move {
            busy.set(true);
            match services.auth.request_otp(&phone()).await {
                Ok(requested) => {
                    toasts.info(requested.message);
                    step.set(Step::EnterOtp {
                        request_id: requested.request_id,
                    });
                }
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let on_verify = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let request_id = match step() {
            Step::EnterOtp { request_id } => request_id,
            Step::EnterPhone => return,
        };
        let services = services.clone();
        spawn_task(async move {
            busy.set(true);
            match services.auth.verify_otp(&phone(), &otp(), &request_id).await {
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
            h1 { class: "text-2xl font-bold mb-4", "Sign in" }

            {
                match step() {
                    Step::EnterPhone => rsx! {
                        form {
                            onsubmit: on_request,
                            FormField {
                                label: "Phone number",
                                value: phone,
                                input_type: "tel",
                                placeholder: "+919876543210",
                            }
                            button {
                                class: "w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 disabled:opacity-50",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() { "Sending code…" } else { "Send code" }
                            }
                        }
                    },
                    Step::EnterOtp { .. } => rsx! {
                        form {
                            onsubmit: on_verify,
                            p { class: "text-sm text-gray-600 mb-3", "We sent a code to {phone}" }
                            FormField {
                                label: "One-time code",
                                value: otp,
                                placeholder: "123456",
                            }
                            button {
                                class: "w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 disabled:opacity-50",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() { "Verifying…" } else { "Verify" }
                            }
                            button {
                                class: "w-full text-sm text-gray-500 underline mt-2",
                                r#type: "button",
                                onclick: move |_| step.set(Step::EnterPhone),
                                "Use a different number"
                            }
                        }
                    },
                }
            }

            p {
                class: "text-sm text-gray-600 mt-4",
                "No account yet? "
                Link { class: "text-blue-600 underline", to: Route::SignUp {}, "Sign up" }
            }
        }
    }
}
