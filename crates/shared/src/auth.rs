//! Authentication request/response contracts.
//!
//! Endpoint mapping:
//! - `POST /api/auth/otp`        -> [`OtpRequest`] / [`OtpRequested`]
//! - `POST /api/auth/verify`     -> [`OtpVerify`] / [`TokenResponse`]
//! - `POST /api/auth/signup`     -> [`SignUpRequest`] / [`TokenResponse`]
//! - `POST /api/auth/login`      -> [`LoginRequest`] / [`TokenResponse`]
//! - `POST /api/admin/login`     -> [`AdminLoginRequest`] / [`AdminTokenResponse`]

use serde::{Deserialize, Serialize};

use gotogether_domain::User;

/// Ask the server to send an OTP to a phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequest {
    pub phone: String,
}

/// Server acknowledgement of an OTP send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequested {
    pub message: String,
    pub request_id: String,
}

/// Submit the code the user received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerify {
    pub phone: String,
    pub otp: String,
    pub request_id: String,
}

/// Password sign-up. Phone is required; email is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Password login with phone or email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

/// Bearer token plus the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: User,
}

/// Admin console login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin bearer token (no user payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_parses_backend_shape() {
        let json = r#"{
            "access_token": "eyJhbGciOi...",
            "user": {
                "id": "7b2a4a6e-3f43-4d3a-9d53-0e9c16d5f6c1",
                "phone": "+919876543210",
                "name": "Asha",
                "is_active": true,
                "is_verified": true,
                "rating": 4.8,
                "total_trips": 12,
                "total_ratings": 10,
                "created_at": "2025-05-01T10:00:00Z"
            }
        }"#;
        let parsed: TokenResponse = serde_json::from_str(json).expect("parse token response");
        assert_eq!(parsed.user.display_name(), "Asha");
        assert!(!parsed.access_token.is_empty());
    }

    #[test]
    fn signup_request_omits_absent_optionals() {
        let req = SignUpRequest {
            phone: "+919876543210".into(),
            email: None,
            password: "hunter2hunter2".into(),
            name: None,
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert!(json.get("email").is_none());
        assert!(json.get("name").is_none());
    }
}
