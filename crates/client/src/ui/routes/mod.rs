//! Route table and thin page components.
//!
//! Pages stay small here; the real UI lives in `presentation::views` and
//! `presentation::components`, and gated pages wrap their content in
//! [`AuthGate`].

use dioxus::prelude::*;

use crate::presentation::components::auth::{
    AdminLoginForm, AuthGate, PhoneSignIn, SignUpForm,
};
use crate::presentation::components::trips::CreateTripForm;
use crate::presentation::views::{HomeView, TripDetailView};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/admin")]
    AdminLogin {},
    #[route("/trips/new")]
    CreateTrip {},
    #[route("/trips/:id")]
    TripDetail { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}

#[component]
fn SignIn() -> Element {
    rsx! {
        PhoneSignIn {}
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        SignUpForm {}
    }
}

#[component]
fn AdminLogin() -> Element {
    rsx! {
        AdminLoginForm {}
    }
}

#[component]
fn CreateTrip() -> Element {
    rsx! {
        AuthGate {
            CreateTripForm {}
        }
    }
}

#[component]
fn TripDetail(id: String) -> Element {
    rsx! {
        AuthGate {
            TripDetailView { id }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "max-w-md mx-auto p-6 text-center",
            h1 { class: "text-2xl font-bold mb-2", "Page not found" }
            p { class: "text-sm text-gray-500 mb-2", "No page at /{path}" }
            Link { class: "text-blue-600 underline", to: Route::Home {}, "Back home" }
        }
    }
}
