//! Raw API Port - Object-safe HTTP boundary
//!
//! The UI/composition root needs an object-safe abstraction that can be
//! stored behind `Arc<dyn ...>`. `RawApiPort` is that boundary, implemented
//! by the reqwest/gloo-net adapter in infrastructure. Application services
//! provide typed wrappers on top.
//!
//! The bearer token is passed per call: which token applies (rider vs
//! admin) is an application-level decision, not an adapter concern.

use serde_json::Value;
use thiserror::Error;

use gotogether_shared::ApiErrorBody;

/// Errors crossing the HTTP boundary.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the
    /// backend's `detail` field when the body was the expected envelope,
    /// otherwise a generic fallback.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Remote` error from a status code and raw body, extracting
    /// the backend's message when possible.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = ApiErrorBody::message_from_body(body)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Remote { status, message }
    }

    /// Whether the server rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Remote { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError>;

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> Result<Value, ApiError>;

    async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_prefers_backend_detail() {
        let err = ApiError::from_response(401, r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn remote_error_falls_back_to_generic_message() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(!err.is_unauthorized());
    }
}
