//! Reusable UI components.

pub mod auth;
pub mod common;
pub mod location_input;
pub mod trips;

pub use location_input::LocationInput;
