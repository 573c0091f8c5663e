//! Signal-backed UI state shared via Dioxus context.

pub mod auth_state;
pub mod chat_state;
pub mod toast_state;

pub use auth_state::AuthState;
pub use chat_state::ChatState;
pub use toast_state::{Toast, ToastKind, ToastState};

use dioxus::prelude::*;

/// Hook to access the AuthState from context
pub fn use_auth_state() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the ToastState from context
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}
