//! Landing page: sign-in entry points, or the open-trip list once
//! signed in.

use dioxus::prelude::*;

use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts};
use crate::ui::routes::Route;
use gotogether_domain::Trip;

#[component]
pub fn HomeView() -> Element {
    let auth = use_auth_state();

    rsx! {
        div {
            class: "max-w-lg mx-auto p-6",
            header {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "GoTogether" }
                if auth.is_signed_in() {
                    SignOutButton {}
                }
            }

            if *auth.hydrating.read() {
                p { class: "text-gray-500", "Restoring your session…" }
            } else if auth.is_signed_in() {
                SignedInHome {}
            } else {
                SignedOutHome {}
            }
        }
    }
}

#[component]
fn SignedOutHome() -> Element {
    rsx! {
        div {
            p { class: "text-gray-700 mb-4", "Share rides around town. Sign in to offer or join trips." }
            div {
                class: "space-y-2",
                Link {
                    class: "block w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 text-center",
                    to: Route::SignIn {},
                    "Sign in with phone"
                }
                Link {
                    class: "block w-full border border-gray-300 rounded p-2 text-center hover:bg-gray-100",
                    to: Route::SignUp {},
                    "Create an account"
                }
                Link {
                    class: "block text-sm text-gray-500 underline text-center mt-2",
                    to: Route::AdminLogin {},
                    "Admin sign in"
                }
            }
        }
    }
}

#[component]
fn SignedInHome() -> Element {
    let services = use_services();
    let mut auth = use_auth_state();
    let mut toasts = use_toasts();

    let mut trips = use_signal(Vec::<Trip>::new);
    let mut loading = use_signal(|| true);

    use_future(move || {
        let services = services.clone();
        async move {
            match services.trips.list_trips().await {
                Ok(list) => trips.set(list),
                Err(e) => {
                    // A rejected token means the session is gone; sign
                    // out instead of re-toasting the 401 on every visit.
                    if e.is_unauthorized() {
                        services.auth.logout();
                        auth.sign_out();
                    }
                    toasts.error(e.user_message());
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            Link {
                class: "block w-full bg-blue-600 hover:bg-blue-700 text-white rounded p-2 text-center mb-4",
                to: Route::CreateTrip {},
                "Offer a trip"
            }

            h2 { class: "text-lg font-semibold mb-2", "Your trips" }
            if loading() {
                p { class: "text-gray-500", "Loading trips…" }
            } else if trips.read().is_empty() {
                p { class: "text-gray-500", "No trips yet. Offer one to get started." }
            } else {
                ul {
                    class: "space-y-2",
                    for trip in trips.read().iter() {
                        li {
                            key: "{trip.id}",
                            Link {
                                class: "block border border-gray-200 rounded-lg p-3 bg-white hover:bg-gray-50",
                                to: Route::TripDetail { id: trip.id.to_string() },
                                div {
                                    class: "flex items-center justify-between",
                                    span {
                                        class: "text-sm font-semibold",
                                        "{route_label(trip)}"
                                    }
                                    span { class: "text-sm text-gray-500", "{trip.vehicle_type.label()}" }
                                }
                                div {
                                    class: "flex items-center justify-between text-sm text-gray-600 mt-1",
                                    span { "{departure_label(trip)}" }
                                    span { "{trip.available_seats} seats · ₹{trip.fare_per_person}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn route_label(trip: &Trip) -> String {
    format!(
        "{} → {}",
        trip.origin_address.as_deref().unwrap_or("Unknown"),
        trip.dest_address.as_deref().unwrap_or("Unknown")
    )
}

fn departure_label(trip: &Trip) -> String {
    trip.departure_time.format("%d %b %H:%M").to_string()
}

#[component]
fn SignOutButton() -> Element {
    let services = use_services();
    let mut auth = use_auth_state();
    let navigator = use_navigator();

    rsx! {
        button {
            class: "text-sm text-gray-500 underline",
            onclick: move |_| {
                services.auth.logout();
                auth.sign_out();
                navigator.push(Route::Home {});
            },
            "Sign out"
        }
    }
}
