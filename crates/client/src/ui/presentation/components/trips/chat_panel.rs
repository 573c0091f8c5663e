//! Live chat panel for one trip
//!
//! On mount this loads the persisted history, opens the room socket, and
//! pumps its events into a [`ChatState`]. Everything the viewer sees
//! (including their own messages) arrives through the server echo, so
//! there is a single render path. The socket closes when the panel
//! unmounts and its pump task is dropped.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::application::services::ChatService;
use crate::infrastructure::{spawn_task, ChatEvent, ChatSender, ConnectionState};
use crate::presentation::services::use_services;
use crate::presentation::state::{use_auth_state, use_toasts, ChatState};
use gotogether_domain::SenderType;

#[component]
pub fn ChatPanel(trip_id: String) -> Element {
    let services = use_services();
    let auth_state = use_auth_state();
    let mut toasts = use_toasts();

    let chat = use_hook(ChatState::new);
    let draft = use_signal(String::new);
    let mut sender = use_signal(|| Option::<ChatSender>::None);

    // History + socket, once per panel instance.
    use_hook(move || {
        let mut chat_for_history = chat;
        let history_services = services.clone();
        let history_trip = trip_id.clone();
        spawn_task(async move {
            match history_services.chat.history(&history_trip).await {
                Ok(messages) => chat_for_history.set_history(messages),
                Err(e) => {
                    toasts.error(e.user_message());
                }
            }
        });

        match services.chat.connect(&trip_id) {
            Ok(mut connection) => {
                sender.set(Some(connection.sender.clone()));

                // One pump: the socket task interleaves broadcasts and
                // state transitions on the same channel, so the header
                // and the send button re-render without polling. The
                // observer only seeds the pre-pump snapshot.
                let mut chat_for_events = chat;
                chat_for_events.set_status(connection.state.state());
                spawn_task(async move {
                    while let Some(event) = connection.events.next().await {
                        match event {
                            ChatEvent::Message(broadcast) => {
                                chat_for_events.push_message(broadcast.message);
                            }
                            ChatEvent::Status(status) => {
                                chat_for_events.set_status(status);
                            }
                        }
                    }
                });
            }
            Err(e) => {
                toasts.error(e.user_message());
            }
        }
    });

    let connected = *chat.status.read() == ConnectionState::Connected;

    let on_send = move |evt: Event<FormData>| {
        evt.prevent_default();
        let mut draft = draft;
        let Some(frame) = ChatService::text_message(&draft()) else {
            return;
        };
        if let Some(sender) = sender.read().as_ref() {
            match sender.send(frame) {
                Ok(()) => draft.set(String::new()),
                Err(_) => {
                    toasts.error("Chat connection lost");
                }
            }
        }
    };

    let own_id = auth_state.user_id();

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg bg-white",
            div {
                class: "flex items-center justify-between p-2 border-b border-gray-200",
                h2 { class: "text-lg font-semibold", "Trip chat" }
                StatusBadge { status: *chat.status.read() }
            }

            div {
                class: "h-64 overflow-y-auto p-2 space-y-2",
                for message in chat.messages.read().iter() {
                    div {
                        key: "{message.id}",
                        class: if message.user_id == own_id && message.sender_type == SenderType::User {
                            "text-sm text-right"
                        } else {
                            "text-sm"
                        },
                        span {
                            class: if message.sender_type == SenderType::Admin {
                                "font-semibold text-green-600"
                            } else {
                                "font-semibold text-gray-700"
                            },
                            "{message.sender_name()}: "
                        }
                        span { "{message.content}" }
                    }
                }
            }

            form {
                class: "flex gap-2 p-2 border-t border-gray-200",
                onsubmit: on_send,
                input {
                    class: "w-full border border-gray-300 rounded p-2 text-sm",
                    r#type: "text",
                    placeholder: "Message the group…",
                    value: "{draft}",
                    oninput: {
                        let mut draft = draft;
                        move |evt: Event<FormData>| draft.set(evt.value())
                    },
                }
                button {
                    class: "bg-blue-600 hover:bg-blue-700 text-white rounded px-4 disabled:opacity-50",
                    r#type: "submit",
                    disabled: !connected,
                    "Send"
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ConnectionState) -> Element {
    let (class, text) = match status {
        ConnectionState::Connected => ("text-sm text-green-600", "connected"),
        ConnectionState::Connecting => ("text-sm text-gray-500", "connecting…"),
        ConnectionState::Disconnected => ("text-sm text-gray-500", "disconnected"),
        ConnectionState::Failed => ("text-sm text-red-600", "connection failed"),
    };
    rsx! {
        span { class: "{class}", "{text}" }
    }
}
