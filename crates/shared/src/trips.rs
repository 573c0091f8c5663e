//! Trip request contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use gotogether_domain::trip::{validate_fare, validate_seats_requested, validate_total_seats};
use gotogether_domain::{DomainError, VehicleType};

/// Payload for `POST /api/trips`.
///
/// Bounds mirror the server-side schema; [`Validate::validate`] is run
/// client-side before the request is sent so form errors surface without a
/// round trip. Seat and fare bounds delegate to the domain invariants so
/// they have exactly one definition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TripCreateRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub origin_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub origin_lng: f64,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub dest_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub dest_lng: f64,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_address: Option<String>,
    pub departure_time: DateTime<Utc>,
    #[validate(custom(function = "offered_seats_in_range"))]
    pub total_seats: u8,
    #[validate(custom(function = "fare_is_positive"))]
    pub fare_per_person: f64,
    pub vehicle_type: VehicleType,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TripCreateRequest {
    /// Validation beyond what the derive covers: departure must be in the
    /// future relative to `now`.
    pub fn validate_departure(&self, now: DateTime<Utc>) -> Result<(), validator::ValidationError> {
        if self.departure_time <= now {
            let mut err = validator::ValidationError::new("departure_in_past");
            err.message = Some("Departure time must be in the future".into());
            return Err(err);
        }
        Ok(())
    }
}

/// Payload for `POST /api/trips/{id}/join`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TripJoinRequest {
    #[validate(custom(function = "requested_seats_in_range"))]
    pub seats_requested: u8,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn offered_seats_in_range(seats: u8) -> Result<(), ValidationError> {
    validate_total_seats(seats).map_err(invariant_violation)
}

fn requested_seats_in_range(seats: u8) -> Result<(), ValidationError> {
    validate_seats_requested(seats).map_err(invariant_violation)
}

fn fare_is_positive(fare: f64) -> Result<(), ValidationError> {
    validate_fare(fare).map_err(invariant_violation)
}

fn invariant_violation(error: DomainError) -> ValidationError {
    let mut out = ValidationError::new("invariant");
    out.message = Some(error.to_string().into());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> TripCreateRequest {
        TripCreateRequest {
            origin_lat: 22.2604,
            origin_lng: 84.8536,
            origin_address: Some("Rourkela Railway Station".into()),
            dest_lat: 22.2497,
            dest_lng: 84.9020,
            dest_address: Some("NIT Rourkela".into()),
            departure_time: Utc::now() + Duration::hours(2),
            total_seats: 3,
            fare_per_person: 40.0,
            vehicle_type: VehicleType::Auto,
            description: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let d = draft();
        assert!(d.validate().is_ok());
        assert!(d.validate_departure(Utc::now()).is_ok());
    }

    #[test]
    fn seat_and_fare_bounds_are_enforced() {
        let mut d = draft();
        d.total_seats = 9;
        assert!(d.validate().is_err());

        let mut d = draft();
        d.fare_per_person = 0.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn join_seat_bounds_come_from_the_domain_invariant() {
        let ok = TripJoinRequest {
            seats_requested: 4,
            message: None,
        };
        assert!(ok.validate().is_ok());

        for seats in [0u8, 5] {
            let bad = TripJoinRequest {
                seats_requested: seats,
                message: None,
            };
            let errors = bad.validate().expect_err("out-of-range seats");
            let report = format!("{errors}");
            assert!(report.contains("seats_requested"), "report: {report}");
        }
    }

    #[test]
    fn past_departure_is_rejected() {
        let mut d = draft();
        d.departure_time = Utc::now() - Duration::minutes(1);
        assert!(d.validate_departure(Utc::now()).is_err());
    }
}
