//! Backend API configuration

use serde::{Deserialize, Serialize};

/// Where the testing backend lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the testing app (e.g. `http://localhost:5000`)
    pub base_url: String,
    /// Per-request timeout; unset means requests may wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_seconds: None,
        }
    }
}
