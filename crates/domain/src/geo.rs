//! Geographic value objects.
//!
//! `GeoPoint` carries WGS84 coordinates; `Location` pairs a point with the
//! human-readable address a suggestion widget or geocoder produced. The
//! `(0, 0)` point is reserved as the "unresolved" marker for free-text
//! entries that were never matched against a location source.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Marker for coordinates that have not been geocoded yet.
    pub const UNRESOLVED: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };

    /// Build a point, validating coordinate bounds.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::validation(format!(
                "latitude out of bounds: {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::validation(format!(
                "longitude out of bounds: {lng}"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Whether this point carries real coordinates (not the unresolved marker).
    pub fn is_resolved(&self) -> bool {
        *self != Self::UNRESOLVED
    }
}

/// A structured location value: coordinates plus display label.
///
/// This is what a location field commits - either a candidate chosen from
/// the suggestion dropdown, or an unresolved placeholder built from raw
/// free text on blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub point: GeoPoint,
    pub address: String,
}

impl Location {
    pub fn new(point: GeoPoint, address: impl Into<String>) -> Self {
        Self {
            point,
            address: address.into(),
        }
    }

    /// Build the "unresolved" location committed when the user blurs the
    /// field with free text that never matched a suggestion. Consumers must
    /// tolerate the `(0, 0)` coordinates or re-geocode later.
    pub fn unresolved(address: impl Into<String>) -> Self {
        Self {
            point: GeoPoint::UNRESOLVED,
            address: address.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.point.is_resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(22.26, 84.85).is_ok());
    }

    #[test]
    fn unresolved_location_has_zero_point_and_raw_label() {
        let loc = Location::unresolved("Some Place");
        assert_eq!(loc.point.lat, 0.0);
        assert_eq!(loc.point.lng, 0.0);
        assert_eq!(loc.address, "Some Place");
        assert!(!loc.is_resolved());
    }

    #[test]
    fn resolved_location_reports_resolved() {
        let point = GeoPoint::new(22.2604, 84.8536).expect("valid point");
        assert!(Location::new(point, "Rourkela Railway Station").is_resolved());
    }
}
