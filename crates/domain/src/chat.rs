//! Chat message entity for the trip chat panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AdminId, ChatMessageId, TripId, UserId};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Admin,
}

/// A persisted chat message, as stored and broadcast by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    // Older API builds name this field after the grouped-ride table.
    #[serde(alias = "grouped_ride_id")]
    pub trip_id: TripId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub admin_id: Option<AdminId>,
    pub content: String,
    pub message_type: String,
    pub sender_type: SenderType,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl ChatMessage {
    /// Display name of the sender; support staff show as "Support".
    pub fn sender_name(&self) -> &str {
        match self.sender_type {
            SenderType::Admin => "Support",
            SenderType::User => self.user_name.as_deref().unwrap_or("Unknown"),
        }
    }
}
