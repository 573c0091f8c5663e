//! API endpoint configuration.
//!
//! The base URL comes from `GOTOGETHER_API_URL` (native) or is injected at
//! build time / derived from the page origin (wasm), defaulting to the
//! local development backend.

/// Where the remote API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL for the current target.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = std::env::var("GOTOGETHER_API_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
            Self::new(base)
        }

        #[cfg(target_arch = "wasm32")]
        {
            // Build-time injection wins; otherwise talk to the page origin.
            if let Some(base) = option_env!("GOTOGETHER_API_URL") {
                return Self::new(base);
            }
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
            Self::new(origin)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// HTTP base converted to the matching WebSocket scheme.
    pub fn ws_base(&self) -> String {
        if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.base_url.clone()
        }
    }

    /// Socket URL for a trip's chat room. The bearer token travels as a
    /// query parameter because the browser WebSocket API has no headers.
    pub fn chat_socket_url(&self, trip_id: &str, token: &str) -> String {
        format!("{}/api/chat/{}?token={}", self.ws_base(), trip_id, token)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_base_flips_scheme() {
        assert_eq!(
            ApiConfig::new("http://localhost:8000").ws_base(),
            "ws://localhost:8000"
        );
        assert_eq!(
            ApiConfig::new("https://api.gotogether.io/").ws_base(),
            "wss://api.gotogether.io"
        );
    }

    #[test]
    fn chat_url_carries_token_as_query_param() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(
            config.chat_socket_url("abc", "tok123"),
            "ws://localhost:8000/api/chat/abc?token=tok123"
        );
    }
}
