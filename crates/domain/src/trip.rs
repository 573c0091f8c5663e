//! Trip entities and trip-level invariants.
//!
//! Field names and enum spellings follow the remote API's JSON exactly so
//! these types deserialize straight off the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::geo::Location;
use crate::ids::{TripId, TripMemberId, UserId};
use crate::user::User;

/// Maximum seats a driver can offer on a single trip.
pub const MAX_TOTAL_SEATS: u8 = 8;
/// Maximum seats a rider can request in one join request.
pub const MAX_SEATS_PER_REQUEST: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Auto,
    Bike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Car, VehicleType::Auto, VehicleType::Bike];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Auto => "Auto",
            VehicleType::Bike => "Bike",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Full,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

/// A ride-sharing offer as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub driver_id: UserId,
    pub origin_lat: f64,
    pub origin_lng: f64,
    #[serde(default)]
    pub origin_address: Option<String>,
    pub dest_lat: f64,
    pub dest_lng: f64,
    #[serde(default)]
    pub dest_address: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub total_seats: u8,
    pub available_seats: u8,
    pub fare_per_person: f64,
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trip {
    /// Origin as a structured location (address may be empty for legacy rows).
    pub fn origin(&self) -> Location {
        Location {
            point: crate::geo::GeoPoint {
                lat: self.origin_lat,
                lng: self.origin_lng,
            },
            address: self.origin_address.clone().unwrap_or_default(),
        }
    }

    /// Destination as a structured location.
    pub fn destination(&self) -> Location {
        Location {
            point: crate::geo::GeoPoint {
                lat: self.dest_lat,
                lng: self.dest_lng,
            },
            address: self.dest_address.clone().unwrap_or_default(),
        }
    }
}

/// A rider's membership (or pending join request) on a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMember {
    pub id: TripMemberId,
    pub trip_id: TripId,
    pub user_id: UserId,
    pub user: User,
    pub seats_requested: u8,
    #[serde(default)]
    pub message: Option<String>,
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full trip payload for the detail page: trip + driver + members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    pub driver: User,
    #[serde(default)]
    pub members: Vec<TripMember>,
}

/// Validate the seat count a driver offers.
pub fn validate_total_seats(seats: u8) -> Result<(), DomainError> {
    if (1..=MAX_TOTAL_SEATS).contains(&seats) {
        Ok(())
    } else {
        Err(DomainError::OutOfRange {
            field: "total_seats",
            min: 1,
            max: MAX_TOTAL_SEATS as i64,
            value: seats as i64,
        })
    }
}

/// Validate the seat count of a join request.
pub fn validate_seats_requested(seats: u8) -> Result<(), DomainError> {
    if (1..=MAX_SEATS_PER_REQUEST).contains(&seats) {
        Ok(())
    } else {
        Err(DomainError::OutOfRange {
            field: "seats_requested",
            min: 1,
            max: MAX_SEATS_PER_REQUEST as i64,
            value: seats as i64,
        })
    }
}

/// Fare must be strictly positive.
pub fn validate_fare(fare: f64) -> Result<(), DomainError> {
    if fare > 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "fare_per_person must be positive, got {fare}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&VehicleType::Auto).expect("serialize");
        assert_eq!(json, "\"auto\"");
        let back: VehicleType = serde_json::from_str("\"bike\"").expect("deserialize");
        assert_eq!(back, VehicleType::Bike);
    }

    #[test]
    fn seat_bounds() {
        assert!(validate_total_seats(1).is_ok());
        assert!(validate_total_seats(8).is_ok());
        assert!(validate_total_seats(0).is_err());
        assert!(validate_total_seats(9).is_err());
        assert!(validate_seats_requested(4).is_ok());
        assert!(validate_seats_requested(5).is_err());
    }

    #[test]
    fn fare_must_be_positive() {
        assert!(validate_fare(25.0).is_ok());
        assert!(validate_fare(0.0).is_err());
        assert!(validate_fare(-1.0).is_err());
    }
}
