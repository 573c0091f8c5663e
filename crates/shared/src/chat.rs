//! Trip chat WebSocket message shapes.
//!
//! The socket speaks JSON text frames. The client only ever sends
//! [`ChatClientMessage`]; everything it receives is a [`ChatBroadcast`]
//! fan-out of a persisted message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gotogether_domain::ChatMessage;

/// Outgoing frame: `{"type": "text", "content": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatClientMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub content: String,
}

impl ChatClientMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            message_type: "text".to_string(),
            content: content.into(),
        }
    }
}

/// Optional push-notification block the server attaches to broadcasts.
/// The web client ignores it but must tolerate its presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastNotification {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub sender_type: Option<String>,
}

/// Incoming frame: a persisted chat message fanned out to all sockets in
/// the trip's room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBroadcast {
    #[serde(flatten)]
    pub message: ChatMessage,
    #[serde(default)]
    pub notification: Option<BroadcastNotification>,
}

#[derive(Debug, Error)]
pub enum ChatParseError {
    #[error("malformed chat frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse an incoming text frame. Unknown fields are ignored so the client
/// survives additive server changes.
pub fn parse_broadcast(text: &str) -> Result<ChatBroadcast, ChatParseError> {
    let parsed = serde_json::from_str(text)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotogether_domain::SenderType;

    #[test]
    fn client_message_serializes_with_type_tag() {
        let frame = ChatClientMessage::text("see you at the gate");
        let json = serde_json::to_value(&frame).expect("serialize");
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "see you at the gate");
    }

    #[test]
    fn parses_server_broadcast_with_notification_block() {
        let text = r#"{
            "id": "0a8ca2a7-8a6f-42cf-b662-5a40b17fb2a5",
            "grouped_ride_id": "b4f7f3a2-31cb-46cb-917c-2f72b2fb1a90",
            "user_id": "7b2a4a6e-3f43-4d3a-9d53-0e9c16d5f6c1",
            "admin_id": null,
            "content": "Running 5 minutes late",
            "message_type": "text",
            "sender_type": "user",
            "created_at": "2025-05-02T08:30:00Z",
            "user_name": "Asha",
            "notification": {
                "title": "New message in group",
                "body": "Asha: Running 5 minutes late",
                "sender_id": "7b2a4a6e-3f43-4d3a-9d53-0e9c16d5f6c1",
                "sender_type": "user"
            }
        }"#;
        let broadcast = parse_broadcast(text).expect("parse broadcast");
        assert_eq!(broadcast.message.sender_type, SenderType::User);
        assert_eq!(broadcast.message.sender_name(), "Asha");
        assert_eq!(broadcast.message.content, "Running 5 minutes late");
        assert!(broadcast.notification.is_some());
    }

    #[test]
    fn admin_broadcast_displays_as_support() {
        let text = r#"{
            "id": "0a8ca2a7-8a6f-42cf-b662-5a40b17fb2a5",
            "trip_id": "b4f7f3a2-31cb-46cb-917c-2f72b2fb1a90",
            "user_id": null,
            "admin_id": "11111111-2222-3333-4444-555555555555",
            "content": "Driver has been notified",
            "message_type": "text",
            "sender_type": "admin",
            "created_at": "2025-05-02T08:31:00Z",
            "user_name": "Support"
        }"#;
        let broadcast = parse_broadcast(text).expect("parse broadcast");
        assert_eq!(broadcast.message.sender_name(), "Support");
    }

    #[test]
    fn rejects_non_json_frames() {
        assert!(parse_broadcast("ping").is_err());
    }
}
