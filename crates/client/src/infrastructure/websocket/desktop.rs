//! Desktop chat socket using tokio-tungstenite.

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use futures_channel::{mpsc, oneshot};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use gotogether_shared::{parse_broadcast, ChatClientMessage};

use super::{publish_state, ChatEvent, ConnectionState};

pub(super) fn spawn_chat_socket(
    url: String,
    out_rx: mpsc::UnboundedReceiver<ChatClientMessage>,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
    state: Arc<AtomicU8>,
    disconnect_rx: oneshot::Receiver<()>,
) {
    tokio::spawn(run(url, out_rx, event_tx, state, disconnect_rx));
}

async fn run(
    url: String,
    mut out_rx: mpsc::UnboundedReceiver<ChatClientMessage>,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
    state: Arc<AtomicU8>,
    mut disconnect_rx: oneshot::Receiver<()>,
) {
    publish_state(&state, &event_tx, ConnectionState::Connecting);

    let ws_stream = match connect_async(&url).await {
        Ok((stream, _)) => {
            tracing::info!("Chat socket connected");
            stream
        }
        Err(e) => {
            tracing::warn!("Chat socket connect failed: {}", e);
            publish_state(&state, &event_tx, ConnectionState::Failed);
            return;
        }
    };

    publish_state(&state, &event_tx, ConnectionState::Connected);
    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => match parse_broadcast(&text) {
                    Ok(broadcast) => {
                        if event_tx.unbounded_send(ChatEvent::Message(broadcast)).is_err() {
                            // UI side dropped the receiver; close quietly.
                            publish_state(&state, &event_tx, ConnectionState::Disconnected);
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("Ignoring malformed chat frame: {}", e),
                },
                Some(Ok(Message::Close(_))) | None => {
                    publish_state(&state, &event_tx, ConnectionState::Disconnected);
                    break;
                }
                Some(Ok(_)) => {
                    // Ping/pong/binary frames are not part of the chat protocol.
                }
                Some(Err(e)) => {
                    tracing::warn!("Chat socket read error: {}", e);
                    publish_state(&state, &event_tx, ConnectionState::Failed);
                    break;
                }
            },
            outgoing = out_rx.next() => match outgoing {
                Some(message) => {
                    let text = match serde_json::to_string(&message) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::error!("Failed to encode chat message: {}", e);
                            continue;
                        }
                    };
                    if let Err(e) = write.send(Message::Text(text)).await {
                        tracing::warn!("Chat socket send failed: {}", e);
                        publish_state(&state, &event_tx, ConnectionState::Failed);
                        break;
                    }
                }
                None => {
                    let _ = write.send(Message::Close(None)).await;
                    publish_state(&state, &event_tx, ConnectionState::Disconnected);
                    break;
                }
            },
            _ = &mut disconnect_rx => {
                let _ = write.send(Message::Close(None)).await;
                publish_state(&state, &event_tx, ConnectionState::Disconnected);
                break;
            }
        }
    }
}
