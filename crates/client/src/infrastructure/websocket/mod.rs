//! Trip chat WebSocket connection.
//!
//! One socket per open trip detail page. The UI gets three handles:
//! a [`ChatSender`] for outgoing text, an event receiver carrying both
//! incoming broadcasts and connection state transitions, and a
//! [`ConnectionStateObserver`] for synchronous snapshots. There is
//! deliberately no reconnection layer; a dropped socket stays dropped
//! until the page reconnects.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use futures_channel::{mpsc, oneshot};

use gotogether_shared::{ChatBroadcast, ChatClientMessage};

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

/// Connection state for the chat socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to the server
    Disconnected,
    /// Attempting to establish connection
    Connecting,
    /// Successfully connected
    Connected,
    /// Connection failed or dropped with an error
    Failed,
}

impl ConnectionState {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            ConnectionState::Disconnected => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Connected => 2,
            ConnectionState::Failed => 3,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            3 => ConnectionState::Failed,
            _ => ConnectionState::Disconnected,
        }
    }
}

/// Observable connection state for UI binding.
///
/// Multiple observers can share the same underlying state without owning
/// the connection.
#[derive(Clone)]
pub struct ConnectionStateObserver {
    state: Arc<AtomicU8>,
}

impl ConnectionStateObserver {
    pub fn new(state: Arc<AtomicU8>) -> Self {
        Self { state }
    }

    /// Get the current connection state.
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Check if currently connected.
    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }
}

/// Something the socket task tells the UI about.
#[derive(Debug)]
pub enum ChatEvent {
    /// A broadcast fanned out to the trip's room.
    Message(ChatBroadcast),
    /// The socket moved to a new connection state.
    Status(ConnectionState),
}

/// Record a state transition and push it to the UI through the event
/// channel, so consumers never have to poll the atomic.
pub(crate) fn publish_state(
    state_ref: &AtomicU8,
    events: &mpsc::UnboundedSender<ChatEvent>,
    new_state: ConnectionState,
) {
    state_ref.store(new_state.to_u8(), Ordering::SeqCst);
    let _ = events.unbounded_send(ChatEvent::Status(new_state));
}

/// Clonable handle for sending chat messages.
#[derive(Clone)]
pub struct ChatSender {
    tx: mpsc::UnboundedSender<ChatClientMessage>,
}

impl ChatSender {
    /// Queue an outgoing message. Fails once the socket task has exited.
    pub fn send(&self, message: ChatClientMessage) -> anyhow::Result<()> {
        self.tx
            .unbounded_send(message)
            .map_err(|e| anyhow::anyhow!("chat socket closed: {e}"))
    }
}

/// Handle bundle for one chat connection.
///
/// Dropping this (or calling [`ChatConnection::disconnect`]) closes the
/// socket; the underlying task notices the cancelled disconnect channel.
pub struct ChatConnection {
    pub sender: ChatSender,
    /// Broadcasts and state transitions, in the order the socket saw them.
    pub events: mpsc::UnboundedReceiver<ChatEvent>,
    pub state: ConnectionStateObserver,
    disconnect_tx: Option<oneshot::Sender<()>>,
}

impl ChatConnection {
    /// Request an orderly close.
    pub fn disconnect(&mut self) {
        if let Some(tx) = self.disconnect_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Open a chat socket to `url` and spawn its IO task for the current target.
pub fn connect(url: &str) -> ChatConnection {
    let (out_tx, out_rx) = mpsc::unbounded::<ChatClientMessage>();
    let (event_tx, event_rx) = mpsc::unbounded::<ChatEvent>();
    let (disconnect_tx, disconnect_rx) = oneshot::channel::<()>();
    let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));

    #[cfg(not(target_arch = "wasm32"))]
    desktop::spawn_chat_socket(
        url.to_string(),
        out_rx,
        event_tx,
        Arc::clone(&state),
        disconnect_rx,
    );

    #[cfg(target_arch = "wasm32")]
    wasm::spawn_chat_socket(
        url.to_string(),
        out_rx,
        event_tx,
        Arc::clone(&state),
        disconnect_rx,
    );

    ChatConnection {
        sender: ChatSender { tx: out_tx },
        events: event_rx,
        state: ConnectionStateObserver::new(state),
        disconnect_tx: Some(disconnect_tx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_state_roundtrip() {
        let states = [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Failed,
        ];

        for state in states {
            assert_eq!(state, ConnectionState::from_u8(state.to_u8()));
        }
    }

    #[test]
    fn state_transitions_reach_the_event_channel() {
        let (tx, mut rx) = mpsc::unbounded::<ChatEvent>();
        let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));
        let observer = ConnectionStateObserver::new(Arc::clone(&state));

        publish_state(&state, &tx, ConnectionState::Connecting);
        publish_state(&state, &tx, ConnectionState::Connected);

        assert!(observer.is_connected());
        assert!(matches!(
            rx.try_next(),
            Ok(Some(ChatEvent::Status(ConnectionState::Connecting)))
        ));
        assert!(matches!(
            rx.try_next(),
            Ok(Some(ChatEvent::Status(ConnectionState::Connected)))
        ));
    }

    #[test]
    fn observer_reads_state() {
        let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));
        let observer = ConnectionStateObserver::new(Arc::clone(&state));

        assert_eq!(observer.state(), ConnectionState::Disconnected);
        assert!(!observer.is_connected());

        state.store(ConnectionState::Connected.to_u8(), Ordering::SeqCst);

        assert_eq!(observer.state(), ConnectionState::Connected);
        assert!(observer.is_connected());
    }
}
