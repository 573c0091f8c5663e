//! Chat Service - trip chat history and live socket
//!
//! History comes over REST; live messages over the WebSocket room for the
//! trip. Admin tokens are accepted so support staff can join any room,
//! matching the server's auth rules.

use std::sync::Arc;

use crate::application::{parse_response, ServiceError};
use crate::config::ApiConfig;
use crate::infrastructure::websocket::{self, ChatConnection};
use crate::ports::outbound::{storage_keys, PlatformPort, RawApiPort};
use gotogether_domain::ChatMessage;
use gotogether_shared::ChatClientMessage;

#[derive(Clone)]
pub struct ChatService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
    config: ApiConfig,
}

impl ChatService {
    pub fn new(
        api: Arc<dyn RawApiPort>,
        platform: Arc<dyn PlatformPort>,
        config: ApiConfig,
    ) -> Self {
        Self {
            api,
            platform,
            config,
        }
    }

    fn token(&self) -> Result<String, ServiceError> {
        self.platform
            .storage_load(storage_keys::AUTH_TOKEN)
            .or_else(|| self.platform.storage_load(storage_keys::ADMIN_TOKEN))
            .ok_or(ServiceError::NotAuthenticated)
    }

    /// `GET /api/chat/{trip_id}/history` - persisted history, oldest first.
    pub async fn history(&self, trip_id: &str) -> Result<Vec<ChatMessage>, ServiceError> {
        let token = self.token()?;
        let value = self
            .api
            .get_json(&format!("/api/chat/{trip_id}/history"), Some(&token))
            .await?;
        parse_response(value)
    }

    /// Open the live socket for a trip's chat room.
    pub fn connect(&self, trip_id: &str) -> Result<ChatConnection, ServiceError> {
        let token = self.token()?;
        let url = self.config.chat_socket_url(trip_id, &token);
        Ok(websocket::connect(&url))
    }

    /// Build the outgoing frame for a text message. Returns `None` for
    /// whitespace-only input, which is never sent.
    pub fn text_message(content: &str) -> Option<ChatClientMessage> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ChatClientMessage::text(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_messages_are_suppressed() {
        assert!(ChatService::text_message("   ").is_none());
        assert!(ChatService::text_message("").is_none());
        let frame = ChatService::text_message("  on my way ").expect("non-empty");
        assert_eq!(frame.content, "on my way");
        assert_eq!(frame.message_type, "text");
    }
}
