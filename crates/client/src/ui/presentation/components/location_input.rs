//! Location autocomplete field
//!
//! Free-text input backed by a per-widget [`SuggestionEngine`]. Typing
//! debounces and queries the location source; the dropdown always shows
//! the latest query's candidates. Picking a candidate commits a resolved
//! [`Location`]; leaving the field with unmatched text commits an
//! unresolved one so the form still has the raw address.

use dioxus::prelude::*;

use crate::application::services::SuggestionOutcome;
use crate::infrastructure::spawn_task;
use crate::presentation::services::use_suggestion_engine;
use gotogether_domain::Location;

#[component]
pub fn LocationInput(
    label: String,
    #[props(default)] placeholder: String,
    on_commit: EventHandler<Location>,
) -> Element {
    let engine = use_suggestion_engine();
    let mut text = use_signal(String::new);
    let mut suggestions = use_signal(Vec::<Location>::new);
    let mut open = use_signal(|| false);
    let mut searching = use_signal(|| false);
    let mut committed = use_signal(|| Option::<Location>::None);

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        text.set(value.clone());
        committed.set(None);
        searching.set(true);
        let engine = engine.clone();
        spawn_task(async move {
            match engine.input(&value).await {
                SuggestionOutcome::Applied(results) => {
                    open.set(!results.is_empty());
                    suggestions.set(results);
                    searching.set(false);
                }
                SuggestionOutcome::Cleared => {
                    suggestions.set(Vec::new());
                    open.set(false);
                    searching.set(false);
                }
                // A newer keystroke owns the field now; its task will
                // settle the signals.
                SuggestionOutcome::Superseded => {}
            }
        });
    };

    let on_blur = move |_| {
        open.set(false);
        if committed.read().is_some() {
            return;
        }
        let raw = text.read().trim().to_string();
        if !raw.is_empty() {
            let location = Location::unresolved(&raw);
            committed.set(Some(location.clone()));
            on_commit.call(location);
        }
    };

    rsx! {
        div {
            class: "relative block mb-3",
            label {
                span { class: "block text-sm text-gray-600 mb-1", "{label}" }
                input {
                    class: "w-full border border-gray-300 rounded p-2 text-sm",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{text}",
                    oninput: on_input,
                    onblur: on_blur,
                }
            }
            if searching() {
                span { class: "text-sm text-gray-500", "Searching…" }
            }
            if open() {
                ul {
                    class: "absolute top-full left-0 w-full bg-white border border-gray-200 rounded shadow-lg z-40",
                    for suggestion in suggestions() {
                        li {
                            key: "{suggestion.address}",
                            class: "p-2 text-sm cursor-pointer hover:bg-gray-100",
                            // mousedown fires before the input's blur, so
                            // the pick wins over the unresolved fallback.
                            onmousedown: {
                                let suggestion = suggestion.clone();
                                move |_| {
                                    text.set(suggestion.address.clone());
                                    committed.set(Some(suggestion.clone()));
                                    suggestions.set(Vec::new());
                                    open.set(false);
                                    on_commit.call(suggestion.clone());
                                }
                            },
                            "{suggestion.address}"
                        }
                    }
                }
            }
        }
    }
}
