//! Browser chat socket over `web_sys::WebSocket`.
//!
//! Incoming frames arrive through event closures; outgoing messages are
//! pumped by a `spawn_local` task reading the shared channel.

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use futures_channel::{mpsc, oneshot};
use futures_util::StreamExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use gotogether_shared::{parse_broadcast, ChatClientMessage};

use super::{publish_state, ChatEvent, ConnectionState};

pub(super) fn spawn_chat_socket(
    url: String,
    mut out_rx: mpsc::UnboundedReceiver<ChatClientMessage>,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
    state: Arc<AtomicU8>,
    disconnect_rx: oneshot::Receiver<()>,
) {
    publish_state(&state, &event_tx, ConnectionState::Connecting);

    let ws = match web_sys::WebSocket::new(&url) {
        Ok(ws) => ws,
        Err(_) => {
            tracing::warn!("Chat socket constructor failed for {}", url);
            publish_state(&state, &event_tx, ConnectionState::Failed);
            return;
        }
    };

    // onopen
    {
        let state = Arc::clone(&state);
        let event_tx = event_tx.clone();
        let on_open = Closure::<dyn FnMut()>::new(move || {
            tracing::info!("Chat socket connected");
            publish_state(&state, &event_tx, ConnectionState::Connected);
        });
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();
    }

    // onmessage
    {
        let event_tx = event_tx.clone();
        let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                if let Some(text) = event.data().as_string() {
                    match parse_broadcast(&text) {
                        Ok(broadcast) => {
                            let _ = event_tx.unbounded_send(ChatEvent::Message(broadcast));
                        }
                        Err(e) => tracing::warn!("Ignoring malformed chat frame: {}", e),
                    }
                }
            },
        );
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();
    }

    // onerror
    {
        let state = Arc::clone(&state);
        let event_tx = event_tx.clone();
        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(
            move |_event: web_sys::ErrorEvent| {
                tracing::warn!("Chat socket error");
                publish_state(&state, &event_tx, ConnectionState::Failed);
            },
        );
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    // onclose
    {
        let state = Arc::clone(&state);
        let on_close =
            Closure::<dyn FnMut(web_sys::CloseEvent)>::new(move |_event: web_sys::CloseEvent| {
                publish_state(&state, &event_tx, ConnectionState::Disconnected);
            });
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();
    }

    // Outgoing pump + disconnect watcher. WebSocket handles are not Send,
    // which is fine for spawn_local.
    {
        let ws_out = ws.clone();
        wasm_bindgen_futures::spawn_local(async move {
            while let Some(message) = out_rx.next().await {
                let text = match serde_json::to_string(&message) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!("Failed to encode chat message: {}", e);
                        continue;
                    }
                };
                if ws_out.send_with_str(&text).is_err() {
                    tracing::warn!("Chat socket send failed");
                    break;
                }
            }
        });

        wasm_bindgen_futures::spawn_local(async move {
            // Resolves on explicit disconnect or when the handle drops.
            let _ = disconnect_rx.await;
            let _ = ws.close();
        });
    }
}
