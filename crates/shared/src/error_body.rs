//! Error envelope the REST API uses for non-2xx responses.

use serde::{Deserialize, Serialize};

/// FastAPI-style error body: `{"detail": "..."}`.
///
/// `detail` can also be a structured validation report; anything that is
/// not a plain string is rendered through its JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// Human-readable message for toasts.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Try to extract a message from a raw response body, if the body is
    /// the expected envelope.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_detail() {
        let msg = ApiErrorBody::message_from_body(r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(msg.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn non_envelope_bodies_yield_none() {
        assert!(ApiErrorBody::message_from_body("<html>bad gateway</html>").is_none());
        assert!(ApiErrorBody::message_from_body(r#"{"error": "x"}"#).is_none());
    }
}
