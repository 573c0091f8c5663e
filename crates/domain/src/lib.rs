//! GoTogether domain layer.
//!
//! Core vocabulary of the ride-sharing client: identifiers, geographic
//! value objects, trip/user/chat entities, and the invariants the remote
//! API enforces (seat ranges, fare bounds, E.164 phone numbers).
//!
//! This crate stays free of IO and UI concerns so it compiles unchanged
//! for both native and wasm32 targets.

pub mod chat;
pub mod error;
pub mod geo;
pub mod ids;
pub mod phone;
pub mod trip;
pub mod user;

pub use chat::{ChatMessage, SenderType};
pub use error::DomainError;
pub use geo::{GeoPoint, Location};
pub use ids::{AdminId, ChatMessageId, TripId, TripMemberId, UserId};
pub use phone::PhoneNumber;
pub use trip::{MemberStatus, Trip, TripDetail, TripMember, TripStatus, VehicleType};
pub use user::User;
