//! HTTP adapter implementing [`RawApiPort`].
//!
//! Native builds use `reqwest`; wasm32 builds use `gloo-net` over the
//! browser's fetch. Both funnel through the same response handling so the
//! error envelope extraction behaves identically across targets.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP client bound to the API base URL.
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Common tail: map status + body into the port's result shape.
    fn handle_response(status: u16, body: &str) -> Result<Value, ApiError> {
        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiAdapter {
    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::handle_response(status, &text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.request(reqwest::Method::GET, path, None, token).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.request(reqwest::Method::POST, path, Some(body), token)
            .await
    }

    async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.request(reqwest::Method::POST, path, None, token).await
    }
}

#[cfg(target_arch = "wasm32")]
impl ApiAdapter {
    async fn send(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let builder = match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::handle_response(status, &text)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.send(gloo_net::http::Request::get(&self.url(path)), None, token)
            .await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.send(
            gloo_net::http::Request::post(&self.url(path)),
            Some(body),
            token,
        )
        .await
    }

    async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.send(gloo_net::http::Request::post(&self.url(path)), None, token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let api = ApiAdapter::new("http://localhost:8000/");
        assert_eq!(api.url("/api/health"), "http://localhost:8000/api/health");
    }

    #[test]
    fn empty_success_body_becomes_null() {
        let value = ApiAdapter::handle_response(204, "").expect("empty body ok");
        assert!(value.is_null());
    }

    #[test]
    fn error_status_surfaces_backend_detail() {
        let err = ApiAdapter::handle_response(404, r#"{"detail": "Trip not found"}"#)
            .expect_err("status 404 must error");
        assert_eq!(err.to_string(), "Trip not found");
    }
}
