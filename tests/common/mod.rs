//! Shared test utilities for kvtest integration tests.
//!
//! Provides payload builders shaped like the testing backend's responses,
//! a wiremock-backed backend, and a scripted in-process `TestingApi`.

#![allow(dead_code)]

use async_trait::async_trait;
use kvtest::api::{ApiError, ConnectionStatus, HttpTestingApi, TestKind, TestResult, TestingApi};
use kvtest::controller::Controller;
use kvtest::page::Page;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Payload Builders
// =============================================================================

/// Status payload as sent by `GET /api/ui/status`.
pub fn status_payload(connected: bool, timestamp: &str) -> Value {
    json!({ "connected": connected, "timestamp": timestamp })
}

/// Passing ping result.
pub fn ping_payload() -> Value {
    json!({ "status": "pass", "message": "PONG", "duration_ms": 0.42 })
}

/// Passing performance result.
pub fn performance_payload() -> Value {
    json!({
        "status": "pass",
        "iterations": 100,
        "total_operations": 300,
        "ops_per_second": 1523.456,
        "avg_latency_ms": 0.6564,
        "operations": { "set": 100, "get": 100, "delete": 100 },
        "duration_ms": 196.98
    })
}

/// Full-suite result with three passes and one failure.
pub fn suite_payload() -> Value {
    json!({
        "status": "failed",
        "tests_passed": 3,
        "tests_failed": 1,
        "tests_total": 4,
        "total_duration_ms": 12.34,
        "tests": {
            "connection": { "status": "pass", "message": "PONG", "duration_ms": 0.5 },
            "set_get": { "status": "pass", "key": "test:key", "value": "hello", "duration_ms": 1.25 },
            "ttl": { "status": "fail", "error": "key expired early" },
            "performance": { "status": "pass", "ops_per_second": 1523.456, "avg_latency_ms": 0.66 }
        }
    })
}

pub fn result(value: Value) -> TestResult {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Mock Backend
// =============================================================================

/// Start a wiremock backend answering the status endpoint.
pub async fn mock_backend_with_status(status: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ui/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status))
        .mount(&server)
        .await;
    server
}

/// Mount a test endpoint answering every run with `body`.
pub async fn mount_test_result(server: &MockServer, status_code: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/ui/test"))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(body))
        .mount(server)
        .await;
}

/// Controller wired to an HTTP backend at `base_url`.
pub fn http_controller(base_url: &str) -> Controller {
    let api = HttpTestingApi::with_client(base_url, reqwest::Client::new());
    Controller::new(Arc::new(api), Arc::new(Page::new()))
}

// =============================================================================
// Scripted Backend
// =============================================================================

/// In-process backend returning scripted answers and recording test kinds.
pub struct ScriptedApi {
    pub status: Result<ConnectionStatus, ApiError>,
    pub result: Result<TestResult, ApiError>,
    pub requested: Mutex<Vec<TestKind>>,
}

impl ScriptedApi {
    pub fn new(
        status: Result<ConnectionStatus, ApiError>,
        result: Result<TestResult, ApiError>,
    ) -> Self {
        Self {
            status,
            result,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Backend that fails every call with a network error.
    pub fn unreachable() -> Self {
        let error = ApiError::Network("connection refused".to_string());
        Self::new(Err(error.clone()), Err(error))
    }
}

#[async_trait]
impl TestingApi for ScriptedApi {
    async fn fetch_status(&self) -> Result<ConnectionStatus, ApiError> {
        self.status.clone()
    }

    async fn run_test(&self, kind: &TestKind) -> Result<TestResult, ApiError> {
        self.requested.lock().unwrap().push(kind.clone());
        self.result.clone()
    }
}

/// Controller over a scripted backend.
pub fn scripted_controller(api: ScriptedApi) -> (Controller, Arc<ScriptedApi>) {
    let api = Arc::new(api);
    let controller = Controller::new(api.clone(), Arc::new(Page::new()));
    (controller, api)
}
