//! Auth Service - Application service for authentication flows
//!
//! Covers the three sign-in surfaces (admin email/password, rider phone
//! OTP, password sign-up/login), OAuth redirect URLs, and session
//! hydration from a persisted token. Tokens live in platform storage
//! under fixed keys (`admin_token`, `auth_token`).

use std::sync::Arc;

use serde_json::json;

use crate::application::{parse_response, ServiceError};
use crate::config::ApiConfig;
use crate::ports::outbound::{storage_keys, PlatformPort, RawApiPort};
use gotogether_domain::{PhoneNumber, User};
use gotogether_shared::{
    AdminLoginRequest, AdminTokenResponse, LoginRequest, OtpRequest, OtpRequested, OtpVerify,
    SignUpRequest, TokenResponse,
};

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn RawApiPort>,
    platform: Arc<dyn PlatformPort>,
    config: ApiConfig,
}

impl AuthService {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>, config: ApiConfig) -> Self {
        Self {
            api,
            platform,
            config,
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    /// Rider bearer token, if one is persisted.
    pub fn auth_token(&self) -> Option<String> {
        self.platform.storage_load(storage_keys::AUTH_TOKEN)
    }

    /// Admin bearer token, if one is persisted.
    pub fn admin_token(&self) -> Option<String> {
        self.platform.storage_load(storage_keys::ADMIN_TOKEN)
    }

    // =========================================================================
    // Admin login
    // =========================================================================

    /// `POST /api/admin/login`. On success the admin token is persisted.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        let request = AdminLoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let value = self
            .api
            .post_json("/api/admin/login", &json!(request), None)
            .await?;
        let token: AdminTokenResponse = parse_response(value)?;
        self.platform
            .storage_save(storage_keys::ADMIN_TOKEN, &token.access_token);
        Ok(())
    }

    // =========================================================================
    // Phone OTP sign-in
    // =========================================================================

    /// `POST /api/auth/otp`. Validates the phone number locally first.
    pub async fn request_otp(&self, phone: &str) -> Result<OtpRequested, ServiceError> {
        let phone: PhoneNumber = phone.parse()?;
        let request = OtpRequest {
            phone: phone.to_string(),
        };
        let value = self.api.post_json("/api/auth/otp", &json!(request), None).await?;
        parse_response(value)
    }

    /// `POST /api/auth/verify`. On success the rider token is persisted and
    /// the signed-in user returned.
    pub async fn verify_otp(
        &self,
        phone: &str,
        otp: &str,
        request_id: &str,
    ) -> Result<User, ServiceError> {
        let phone: PhoneNumber = phone.parse()?;
        let request = OtpVerify {
            phone: phone.to_string(),
            otp: otp.trim().to_string(),
            request_id: request_id.to_string(),
        };
        let value = self
            .api
            .post_json("/api/auth/verify", &json!(request), None)
            .await?;
        let token: TokenResponse = parse_response(value)?;
        self.platform
            .storage_save(storage_keys::AUTH_TOKEN, &token.access_token);
        Ok(token.user)
    }

    // =========================================================================
    // Password sign-up / login
    // =========================================================================

    /// `POST /api/auth/signup` (201). Persists the rider token.
    pub async fn signup(&self, request: SignUpRequest) -> Result<User, ServiceError> {
        let _: PhoneNumber = request.phone.parse()?;
        if request.password.len() < 8 {
            return Err(ServiceError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        let value = self
            .api
            .post_json("/api/auth/signup", &json!(request), None)
            .await?;
        let token: TokenResponse = parse_response(value)?;
        self.platform
            .storage_save(storage_keys::AUTH_TOKEN, &token.access_token);
        Ok(token.user)
    }

    /// `POST /api/auth/login`. Persists the rider token.
    pub async fn login(&self, request: LoginRequest) -> Result<User, ServiceError> {
        if request.phone.is_none() && request.email.is_none() {
            return Err(ServiceError::Validation(
                "Phone or email is required".to_string(),
            ));
        }
        let value = self
            .api
            .post_json("/api/auth/login", &json!(request), None)
            .await?;
        let token: TokenResponse = parse_response(value)?;
        self.platform
            .storage_save(storage_keys::AUTH_TOKEN, &token.access_token);
        Ok(token.user)
    }

    /// Remote OAuth sign-up entry point; the UI navigates the page there
    /// and the provider redirects back with a token.
    pub fn oauth_signup_url(&self, provider: &str) -> String {
        format!("{}/api/auth/oauth/{provider}", self.config.base_url())
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Hydrate the session from the persisted rider token.
    ///
    /// Any failure (no token, rejected token, malformed response) clears
    /// the persisted token and yields `None` - the app renders signed-out
    /// rather than half-authenticated.
    pub async fn hydrate_session(&self) -> Option<User> {
        let token = self.auth_token()?;

        let result: Result<User, ServiceError> = async {
            let value = self.api.get_json("/api/auth/me", Some(&token)).await?;
            parse_response(value)
        }
        .await;

        match result {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Session hydration failed, signing out: {}", e);
                self.platform.storage_remove(storage_keys::AUTH_TOKEN);
                None
            }
        }
    }

    /// Drop both persisted tokens.
    pub fn logout(&self) {
        self.platform.storage_remove(storage_keys::AUTH_TOKEN);
        self.platform.storage_remove(storage_keys::ADMIN_TOKEN);
    }

    /// `GET /health` - cheap reachability probe for the login screens.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        self.api.get_json("/health", None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::ApiError;
    use serde_json::Value;

    /// Canned API double: every call answers from a fixed table.
    struct StubApi {
        responses: std::collections::HashMap<String, Result<Value, ApiError>>,
    }

    impl StubApi {
        fn new() -> Self {
            Self {
                responses: std::collections::HashMap::new(),
            }
        }

        fn with(mut self, path: &str, result: Result<Value, ApiError>) -> Self {
            self.responses.insert(path.to_string(), result);
            self
        }

        fn lookup(&self, path: &str) -> Result<Value, ApiError> {
            self.responses.get(path).cloned().unwrap_or_else(|| {
                Err(ApiError::Network(format!("no stub for {path}")))
            })
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for StubApi {
        async fn get_json(&self, path: &str, _token: Option<&str>) -> Result<Value, ApiError> {
            self.lookup(path)
        }

        async fn post_json(
            &self,
            path: &str,
            _body: &Value,
            _token: Option<&str>,
        ) -> Result<Value, ApiError> {
            self.lookup(path)
        }

        async fn post_empty(&self, path: &str, _token: Option<&str>) -> Result<Value, ApiError> {
            self.lookup(path)
        }
    }

    fn service(api: StubApi, platform: MockPlatform) -> AuthService {
        AuthService::new(Arc::new(api), Arc::new(platform), ApiConfig::default())
    }

    fn user_json() -> Value {
        json!({
            "id": "7b2a4a6e-3f43-4d3a-9d53-0e9c16d5f6c1",
            "phone": "+919876543210",
            "name": "Asha",
            "is_active": true,
            "is_verified": true,
            "rating": 4.8,
            "total_trips": 12,
            "total_ratings": 10,
            "created_at": "2025-05-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn hydration_failure_clears_token_and_signs_out() {
        let platform = MockPlatform::new().with_stored(storage_keys::AUTH_TOKEN, "stale-token");
        let api = StubApi::new().with(
            "/api/auth/me",
            Err(ApiError::Remote {
                status: 401,
                message: "Could not validate credentials".into(),
            }),
        );
        let platform_probe = platform.clone();

        let session = service(api, platform).hydrate_session().await;

        assert!(session.is_none());
        assert!(platform_probe.storage_load(storage_keys::AUTH_TOKEN).is_none());
    }

    #[tokio::test]
    async fn hydration_without_token_makes_no_request() {
        // StubApi errors on any request, so a network call would fail loudly
        // if one happened; the point is hydration short-circuits first.
        let api = StubApi::new();
        let session = service(api, MockPlatform::new()).hydrate_session().await;
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn successful_hydration_keeps_token() {
        let platform = MockPlatform::new().with_stored(storage_keys::AUTH_TOKEN, "good-token");
        let api = StubApi::new().with("/api/auth/me", Ok(user_json()));
        let platform_probe = platform.clone();

        let session = service(api, platform).hydrate_session().await;

        assert_eq!(
            session.map(|u| u.display_name().to_string()).as_deref(),
            Some("Asha")
        );
        assert_eq!(
            platform_probe
                .storage_load(storage_keys::AUTH_TOKEN)
                .as_deref(),
            Some("good-token")
        );
    }

    #[tokio::test]
    async fn admin_login_persists_admin_token() {
        let platform = MockPlatform::new();
        let api = StubApi::new().with(
            "/api/admin/login",
            Ok(json!({ "access_token": "admin-jwt" })),
        );
        let platform_probe = platform.clone();

        service(api, platform)
            .admin_login("ops@gotogether.io", "secret")
            .await
            .expect("login succeeds");

        assert_eq!(
            platform_probe
                .storage_load(storage_keys::ADMIN_TOKEN)
                .as_deref(),
            Some("admin-jwt")
        );
    }

    #[tokio::test]
    async fn verify_otp_persists_rider_token() {
        let platform = MockPlatform::new();
        let api = StubApi::new().with(
            "/api/auth/verify",
            Ok(json!({ "access_token": "rider-jwt", "user": user_json() })),
        );
        let platform_probe = platform.clone();

        let user = service(api, platform)
            .verify_otp("+919876543210", "123456", "req-1")
            .await
            .expect("verify succeeds");

        assert_eq!(user.display_name(), "Asha");
        assert_eq!(
            platform_probe
                .storage_load(storage_keys::AUTH_TOKEN)
                .as_deref(),
            Some("rider-jwt")
        );
    }

    #[tokio::test]
    async fn request_otp_rejects_non_e164_phone() {
        let api = StubApi::new();
        let result = service(api, MockPlatform::new()).request_otp("9876543210").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn health_check_probes_the_health_endpoint() {
        // StubApi answers only stubbed paths, so a success here means the
        // probe hit exactly `/health`.
        let api = StubApi::new().with("/health", Ok(json!({ "status": "healthy" })));
        assert!(service(api, MockPlatform::new()).health_check().await.is_ok());

        let unreachable = StubApi::new();
        assert!(service(unreachable, MockPlatform::new())
            .health_check()
            .await
            .is_err());
    }

    #[test]
    fn oauth_url_points_at_provider_endpoint() {
        let svc = AuthService::new(
            Arc::new(StubApi::new()),
            Arc::new(MockPlatform::new()),
            ApiConfig::new("http://localhost:8000"),
        );
        assert_eq!(
            svc.oauth_signup_url("google"),
            "http://localhost:8000/api/auth/oauth/google"
        );
    }
}
