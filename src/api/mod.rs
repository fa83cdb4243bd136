//! Client for the testing backend's UI API.
//!
//! ## Endpoints
//!
//! - `GET /api/ui/status` - store connectivity ([`ConnectionStatus`])
//! - `POST /api/ui/test` - run a test routine, body `{"type": <token>}` ([`TestResult`])
//!
//! The backend reports failed tests inside the response body, so any response
//! that decodes as JSON is returned as data regardless of its HTTP status.
//! Only transport and decode failures become [`ApiError`]s.

pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::{ConnectionStatus, RunTestRequest, TestKind, TestResult};

use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Path of the connectivity endpoint.
pub const STATUS_PATH: &str = "/api/ui/status";

/// Path of the test-execution endpoint.
pub const TEST_PATH: &str = "/api/ui/test";

/// Operations the console needs from the backend.
///
/// Object-safe so the controller can hold an `Arc<dyn TestingApi>` and tests
/// can substitute a scripted implementation.
#[async_trait]
pub trait TestingApi: Send + Sync + 'static {
    /// Read-only connectivity check.
    async fn fetch_status(&self) -> Result<ConnectionStatus, ApiError>;

    /// Side-effecting test run for the given token.
    async fn run_test(&self, kind: &TestKind) -> Result<TestResult, ApiError>;
}

/// [`TestingApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTestingApi {
    client: reqwest::Client,
    base_url: String,
    timeout_seconds: Option<u64>,
}

impl HttpTestingApi {
    /// Build a client from configuration. No timeout is applied unless one is configured.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_seconds: config.request_timeout_seconds,
        })
    }

    /// Create a client around an existing `reqwest::Client` (for testing).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout_seconds: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Read the whole body and decode it, whatever the HTTP status.
    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify_error(e))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Backend returned non-success status");
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Classify reqwest error into ApiError.
    fn classify_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.timeout_seconds.unwrap_or_default())
        } else if e.is_decode() {
            ApiError::InvalidResponse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl TestingApi for HttpTestingApi {
    async fn fetch_status(&self) -> Result<ConnectionStatus, ApiError> {
        let url = self.url(STATUS_PATH);
        tracing::debug!(url = %url, "Fetching connection status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.decode(response).await
    }

    async fn run_test(&self, kind: &TestKind) -> Result<TestResult, ApiError> {
        let url = self.url(TEST_PATH);
        tracing::debug!(url = %url, test_type = %kind, "Requesting test run");

        let body = RunTestRequest { kind: kind.clone() };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.decode(response).await
    }
}
