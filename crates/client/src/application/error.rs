//! Service-level error type.
//!
//! `Display` output doubles as the toast message, so every variant reads
//! as a sentence a user can act on. Remote failures carry the backend's
//! `detail` text via [`ApiError`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::ports::outbound::ApiError;
use gotogether_domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Local form validation failed before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("You need to sign in first")]
    NotAuthenticated,

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Message for user-facing toasts.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the server rejected the caller's credentials. Views use
    /// this to drop a stale persisted token instead of toasting the same
    /// 401 on every load.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Api(e) if e.is_unauthorized())
    }
}

/// Decode a typed response out of the raw JSON the port returned.
pub fn parse_response<T: DeserializeOwned>(value: Value) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejected_credentials_count_as_unauthorized() {
        let rejected = ServiceError::Api(ApiError::Remote {
            status: 401,
            message: "Could not validate credentials".into(),
        });
        assert!(rejected.is_unauthorized());

        let not_found = ServiceError::Api(ApiError::Remote {
            status: 404,
            message: "Trip not found".into(),
        });
        assert!(!not_found.is_unauthorized());

        let offline = ServiceError::Api(ApiError::Network("connection refused".into()));
        assert!(!offline.is_unauthorized());
        assert!(!ServiceError::NotAuthenticated.is_unauthorized());
    }
}
