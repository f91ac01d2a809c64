//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use carlot_api::{AppState, build_app};
use carlot_core::config::AppConfig;

pub const PASSWORD: &str = "password123";

/// Test application context over the memory backends.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::from_toml_str(include_str!("../fixtures/test_config.toml"))
            .expect("Failed to load test config");
        let state = AppState::from_config(config)
            .await
            .expect("Failed to build app state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Sign up through the API and return `(access, refresh)`.
    pub async fn signup(&self, login: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(json!({ "login": login, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
        response.tokens()
    }

    /// Create an admin directly in the session service, the way the CLI bootstraps one.
    pub async fn bootstrap_admin(&self, login: &str) -> String {
        self.state
            .sessions
            .sign_up(login, PASSWORD, true)
            .await
            .expect("Failed to create admin")
            .access_token
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

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

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Call an RPC method.
    pub async fn rpc(&self, method: &str, params: Value, token: Option<&str>) -> TestResponse {
        self.request(
            "POST",
            "/rpc",
            Some(json!({ "method": method, "params": params })),
            token,
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// `(access, refresh)` from a REST token response.
    pub fn tokens(&self) -> (String, String) {
        let data = &self.body["data"];
        (
            data["access_token"].as_str().expect("No access_token").to_string(),
            data["refresh_token"].as_str().expect("No refresh_token").to_string(),
        )
    }

    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
