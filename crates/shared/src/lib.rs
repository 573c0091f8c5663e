//! GoTogether wire contracts.
//!
//! Request/response DTOs for the REST API and the JSON message shapes used
//! on the trip chat WebSocket. These types are the single source of truth
//! for what goes on the wire; the client never hand-builds JSON.

pub mod auth;
pub mod chat;
pub mod error_body;
pub mod trips;

pub use auth::{
    AdminLoginRequest, AdminTokenResponse, LoginRequest, OtpRequest, OtpRequested, OtpVerify,
    SignUpRequest, TokenResponse,
};
pub use chat::{parse_broadcast, ChatBroadcast, ChatClientMessage};
pub use error_body::ApiErrorBody;
pub use trips::{TripCreateRequest, TripJoinRequest};
