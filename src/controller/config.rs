//! Configuration for status polling.

use serde::{Deserialize, Serialize};

/// Configuration for the background status poller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Whether the web console polls in the background
    pub enabled: bool,
    /// Seconds between status refreshes
    pub interval_seconds: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 30,
        }
    }
}
