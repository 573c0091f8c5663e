//! Application layer: typed services over the raw HTTP/WebSocket ports.

pub mod error;
pub mod services;

pub use error::{parse_response, ServiceError};
