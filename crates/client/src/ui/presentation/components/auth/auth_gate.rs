//! Gate for views that require a signed-in user.
//!
//! While the initial token check is still running this renders a
//! placeholder, so a valid persisted session never flashes the sign-in
//! prompt on its way in.

use dioxus::prelude::*;

use crate::presentation::state::use_auth_state;
use crate::ui::routes::Route;

#[component]
pub fn AuthGate(children: Element) -> Element {
    let auth = use_auth_state();

    if *auth.hydrating.read() {
        return rsx! {
            div {
                class: "flex items-center justify-center p-6 text-gray-500",
                "Restoring your session…"
            }
        };
    }

    if !auth.is_signed_in() {
        return rsx! {
            div {
                class: "max-w-md mx-auto p-6 text-center",
                p { class: "text-gray-700 mb-3", "You need to sign in to view this page." }
                Link {
                    class: "text-blue-600 underline",
                    to: Route::SignIn {},
                    "Go to sign in"
                }
            }
        };
    }

    rsx! {
        {children}
    }
}
