//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tokenforge_api::{AppState, build_router};
use tokenforge_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("Failed to build app state");
        Self {
            router: build_router(state),
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let (status, bytes) = self.send(req).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Make a raw request with an explicit content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &str,
    ) -> TestTextResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let (status, bytes) = self.send(req).await;
        let text = String::from_utf8(bytes).expect("Response body is not UTF-8");

        TestTextResponse { status, text }
    }

    /// Submit the HTML form
    pub async fn submit_form(&self, form_body: &str) -> TestTextResponse {
        self.request_raw(
            "POST",
            "/form",
            "application/x-www-form-urlencoded",
            form_body,
        )
        .await
    }

    /// Send a CORS preflight and return the response headers
    pub async fn preflight(&self, path: &str, origin: &str, method: &str) -> (StatusCode, HeaderMap) {
        let req = Request::builder()
            .method("OPTIONS")
            .uri(path)
            .header("Origin", origin)
            .header("Access-Control-Request-Method", method)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        (response.status(), response.headers().clone())
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        (status, body_bytes.to_vec())
    }
}

/// JSON response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// String field of the body
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(|v| v.as_str())
    }

    /// `tokens` array of the body as strings
    pub fn tokens(&self) -> Vec<String> {
        self.body
            .get("tokens")
            .and_then(|v| v.as_array())
            .expect("No tokens array in response")
            .iter()
            .map(|t| t.as_str().expect("token is not a string").to_string())
            .collect()
    }
}

/// Text/HTML response from a test request
#[derive(Debug)]
pub struct TestTextResponse {
    pub status: StatusCode,
    pub text: String,
}

/// Whether `s` is lowercase hex of the given length
pub fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
