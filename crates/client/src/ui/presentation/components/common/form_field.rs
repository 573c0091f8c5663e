//! Labeled text input used by the auth and trip forms.

use dioxus::prelude::*;

#[component]
pub fn FormField(
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    let mut value = value;
    rsx! {
        label {
            class: "block mb-3",
            span { class: "block text-sm text-gray-600 mb-1", "{label}" }
            input {
                class: "w-full border border-gray-300 rounded p-2 text-sm",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}
