//! Trip Service - Application service for trip fetch/create/join/approve
//!
//! Thin typed layer over the trips endpoints. Create requests are
//! validated locally (same bounds the server enforces) so the form gets
//! immediate feedback without a round trip.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::application::{parse_response, ServiceError};
use crate::ports::outbound::{PlatformPort, RawApiPort};
use crate::ports::outbound::storage_keys;
use gotogether_domain::{Trip, TripDetail, TripMember};
use gotogether_shared::{TripCreateRequest, TripJoinRequest};

#[derive(Clone)]
pub struct TripService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl TripService {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    fn token(&self) -> Result<String, ServiceError> {
        self.platform
            .storage_load(storage_keys::AUTH_TOKEN)
            .or_else(|| self.platform.storage_load(storage_keys::ADMIN_TOKEN))
            .ok_or(ServiceError::NotAuthenticated)
    }

    /// `GET /api/trips` - trips the caller drives or has joined.
    pub async fn list_trips(&self) -> Result<Vec<Trip>, ServiceError> {
        let token = self.token()?;
        let value = self.api.get_json("/api/trips", Some(&token)).await?;
        parse_response(value)
    }

    /// `GET /api/trips/{id}` - full detail payload (driver + members).
    pub async fn get_trip(&self, trip_id: &str) -> Result<TripDetail, ServiceError> {
        let token = self.token()?;
        let value = self
            .api
            .get_json(&format!("/api/trips/{trip_id}"), Some(&token))
            .await?;
        parse_response(value)
    }

    /// `POST /api/trips` after local validation.
    pub async fn create_trip(&self, request: &TripCreateRequest) -> Result<Trip, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::Validation(first_validation_message(&e)))?;
        request
            .validate_departure(Utc::now())
            .map_err(|e| ServiceError::Validation(validation_error_message(&e)))?;

        let token = self.token()?;
        let value = self
            .api
            .post_json("/api/trips", &json!(request), Some(&token))
            .await?;
        parse_response(value)
    }

    /// `POST /api/trips/{id}/join` - request a seat on someone's trip.
    pub async fn join_trip(
        &self,
        trip_id: &str,
        request: &TripJoinRequest,
    ) -> Result<TripMember, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::Validation(first_validation_message(&e)))?;
        let token = self.token()?;
        let value = self
            .api
            .post_json(&format!("/api/trips/{trip_id}/join"), &json!(request), Some(&token))
            .await?;
        parse_response(value)
    }

    /// `POST /api/trips/{trip_id}/members/{member_id}/approve` - driver
    /// approves a pending join request.
    pub async fn approve_member(
        &self,
        trip_id: &str,
        member_id: &str,
    ) -> Result<TripMember, ServiceError> {
        let token = self.token()?;
        let value = self
            .api
            .post_empty(
                &format!("/api/trips/{trip_id}/members/{member_id}/approve"),
                Some(&token),
            )
            .await?;
        parse_response(value)
    }
}

/// Flatten a validator report into the first human-readable message.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {field}"),
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid trip details".to_string())
}

fn validation_error_message(error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Invalid trip details".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::ApiError;
    use chrono::Duration;
    use gotogether_domain::VehicleType;
    use serde_json::Value;

    struct RecordingApi {
        calls: std::sync::Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn new() -> Self {
            Self {
                calls: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn record(&self, path: &str) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(path.to_string());
            }
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for RecordingApi {
        async fn get_json(&self, path: &str, _token: Option<&str>) -> Result<Value, ApiError> {
            self.record(path);
            Err(ApiError::Network("stub".into()))
        }

        async fn post_json(
            &self,
            path: &str,
            _body: &Value,
            _token: Option<&str>,
        ) -> Result<Value, ApiError> {
            self.record(path);
            Err(ApiError::Network("stub".into()))
        }

        async fn post_empty(&self, path: &str, _token: Option<&str>) -> Result<Value, ApiError> {
            self.record(path);
            Err(ApiError::Network("stub".into()))
        }
    }

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

    #[tokio::test]
    async fn create_rejects_invalid_draft_before_any_request() {
        let api = Arc::new(RecordingApi::new());
        let platform = MockPlatform::new().with_stored(storage_keys::AUTH_TOKEN, "tok");
        let service = TripService::new(api.clone(), Arc::new(platform));

        let mut bad = draft();
        bad.total_seats = 0;
        let result = service.create_trip(&bad).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(api.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn create_rejects_past_departure() {
        let api = Arc::new(RecordingApi::new());
        let platform = MockPlatform::new().with_stored(storage_keys::AUTH_TOKEN, "tok");
        let service = TripService::new(api.clone(), Arc::new(platform));

        let mut bad = draft();
        bad.departure_time = Utc::now() - Duration::minutes(5);
        let result = service.create_trip(&bad).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(api.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn operations_require_a_token() {
        let api = Arc::new(RecordingApi::new());
        let service = TripService::new(api.clone(), Arc::new(MockPlatform::new()));

        let result = service.get_trip("some-trip").await;

        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
        assert!(api.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn approve_targets_the_member_subresource() {
        let api = Arc::new(RecordingApi::new());
        let platform = MockPlatform::new().with_stored(storage_keys::AUTH_TOKEN, "tok");
        let service = TripService::new(api.clone(), Arc::new(platform));

        let _ = service.approve_member("trip-1", "member-9").await;

        assert_eq!(
            api.calls.lock().expect("lock").as_slice(),
            ["/api/trips/trip-1/members/member-9/approve"]
        );
    }
}
