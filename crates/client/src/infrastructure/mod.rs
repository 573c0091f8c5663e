//! Infrastructure adapters: platform services, HTTP client, chat WebSocket.

pub mod http_client;
pub mod platform;
pub mod websocket;

// Re-export connection state types for UI binding
pub use websocket::{ChatConnection, ChatEvent, ChatSender, ConnectionState, ConnectionStateObserver};

/// Spawn a UI-scoped future on the Dioxus runtime.
///
/// Must be called from within a component or hook. Futures spawned this way
/// may capture signals (they stay on the UI scheduler on both targets).
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut);
}
