use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Browser,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/client/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let services = use_context::<presentation::Services>();

    // These must be created inside an active Dioxus runtime.
    let auth_state = use_context_provider(presentation::state::AuthState::new);
    use_context_provider(presentation::state::ToastState::new);

    // Hydrate the session once from the persisted token. Until this
    // resolves the app is in the `hydrating` state and gated views show
    // a placeholder instead of bouncing to the sign-in screen.
    use_future(move || {
        let services = services.clone();
        let mut auth_state = auth_state;
        async move {
            let user = services.auth.hydrate_session().await;
            let is_admin = services.auth.admin_token().is_some();
            auth_state.finish_hydration(user, is_admin);
        }
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Browser => rsx! {
                    BrowserShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }

        presentation::components::common::ToastHost {}
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow-y: auto;",
            {children}
        }
    }
}

#[component]
fn BrowserShell(children: Element) -> Element {
    // The browser manages the viewport itself; no fixed bounds.
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            {children}
        }
    }
}
