//! Application services consumed by the presentation layer.

pub mod auth_service;
pub mod chat_service;
pub mod geocode;
pub mod trip_service;

pub use auth_service::AuthService;
pub use chat_service::ChatService;
pub use geocode::{
    LocationSource, MockLocationSource, SuggestionEngine, SuggestionOutcome, SuggestionState,
    MIN_QUERY_LEN,
};
pub use trip_service::TripService;
