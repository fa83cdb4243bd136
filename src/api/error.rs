//! Error types for backend API calls.

use thiserror::Error;

/// Errors that can occur while talking to the testing backend.
///
/// Application-level failures (a test that did not pass) are not errors:
/// they arrive inside a successful response and are rendered as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network connectivity error (DNS, connection refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {0}s")]
    Timeout(u64),

    /// Response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
