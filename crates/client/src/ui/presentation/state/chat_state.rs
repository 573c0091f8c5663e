//! Per-room chat state: message list plus socket status.

use dioxus::prelude::*;

use crate::infrastructure::ConnectionState;
use gotogether_domain::ChatMessage;

/// State for one open chat room. Created per trip detail page rather
/// than provided app-wide; only that page owns a socket.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub messages: Signal<Vec<ChatMessage>>,
    pub status: Signal<ConnectionState>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Signal::new(Vec::new()),
            status: Signal::new(ConnectionState::Disconnected),
        }
    }

    /// Replace the list with persisted history (oldest first).
    pub fn set_history(&mut self, history: Vec<ChatMessage>) {
        self.messages.set(history);
    }

    /// Append a live broadcast. The server echoes the sender's own
    /// messages back, so everything renders through this one path;
    /// duplicates (history overlapping the first broadcasts) are dropped
    /// by id.
    pub fn push_message(&mut self, message: ChatMessage) {
        if self.messages.read().iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.write().push(message);
    }

    pub fn set_status(&mut self, status: ConnectionState) {
        if *self.status.read() != status {
            self.status.set(status);
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
