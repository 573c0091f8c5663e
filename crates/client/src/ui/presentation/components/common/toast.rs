//! Toast overlay
//!
//! Renders the app-wide toast queue in the bottom-right corner. Each
//! toast auto-dismisses after 5 seconds or on click.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::state::{use_toasts, Toast, ToastKind};
use crate::ui::use_platform;

const AUTO_DISMISS_MS: u64 = 5_000;

#[component]
pub fn ToastHost() -> Element {
    let toast_state = use_toasts();
    let toasts = toast_state.toasts()();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 space-y-2",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toast_state = use_toasts();
    let platform = use_platform();
    let id = toast.id;

    // Dismiss timer, armed once per toast instance.
    use_hook(move || {
        spawn_task(async move {
            platform.sleep_ms(AUTO_DISMISS_MS).await;
            toast_state.dismiss(id);
        });
    });

    let accent = match toast.kind {
        ToastKind::Info => "bg-blue-600",
        ToastKind::Success => "bg-green-600",
        ToastKind::Error => "bg-red-600",
    };

    rsx! {
        div {
            class: "{accent} text-white rounded-lg shadow-lg p-4 max-w-md cursor-pointer",
            onclick: move |_| toast_state.dismiss(id),
            div {
                class: "flex items-start justify-between gap-2",
                p { class: "text-sm", "{toast.message}" }
                span { class: "text-white/70", "×" }
            }
        }
    }
}
