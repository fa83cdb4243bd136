//! Console controller: status refresh and test runs.
//!
//! The controller is the only writer of connection and run state on the
//! [`Page`]. Failures to reach the backend are never returned to the caller;
//! they are logged and turned into visual state (a disconnected indicator or
//! an error panel), exactly like an application-level failure would be shown.

mod clock;
mod config;
mod poller;

pub use clock::{format_local_time, INVALID_DATE};
pub use config::PollerConfig;
pub use poller::StatusPoller;

use crate::api::{ConnectionStatus, TestKind, TestResult, TestingApi};
use crate::page::{Display, ElementId, Page};
use crate::render::{display_results, render_error_panel};
use std::sync::Arc;

/// What the status badge ended up showing after a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Backend reported `status == "success"`
    Success(TestResult),
    /// Backend answered with any other status
    Failed(TestResult),
    /// Request or decode failed; carries the error message
    Error(String),
}

impl RunOutcome {
    /// Badge text for this outcome.
    pub fn badge(&self) -> &'static str {
        match self {
            RunOutcome::Success(_) => "Success",
            RunOutcome::Failed(_) => "Failed",
            RunOutcome::Error(_) => "Error",
        }
    }

    /// The backend's payload, when one arrived.
    pub fn result(&self) -> Option<&TestResult> {
        match self {
            RunOutcome::Success(data) | RunOutcome::Failed(data) => Some(data),
            RunOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RunOutcome::Error(_))
    }
}

/// Drives the page from backend responses.
#[derive(Clone)]
pub struct Controller {
    api: Arc<dyn TestingApi>,
    page: Arc<Page>,
}

impl Controller {
    pub fn new(api: Arc<dyn TestingApi>, page: Arc<Page>) -> Self {
        Self { api, page }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    /// Fetch connectivity and update the indicator.
    ///
    /// Any failure is shown as disconnected at the current client time. No retry.
    pub async fn refresh_status(&self) -> ConnectionStatus {
        let status = match self.api.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch status");
                ConnectionStatus::disconnected_now()
            }
        };

        self.update_connection_status(&status);
        status
    }

    /// Render a connection status into the indicator, label and last-check time.
    pub fn update_connection_status(&self, status: &ConnectionStatus) {
        let (indicator, label, label_class) = if status.connected {
            ("status-indicator connected", "Connected", "fw-bold text-success")
        } else {
            (
                "status-indicator disconnected",
                "Disconnected",
                "fw-bold text-danger",
            )
        };

        self.page.set_class(ElementId::StatusIndicator, indicator);
        self.page.update(ElementId::ConnectionStatus, |el| {
            el.text_content = label.to_string();
            el.class_name = label_class.to_string();
        });
        self.page
            .set_text(ElementId::LastCheck, format_local_time(&status.timestamp));
    }

    /// Run a test on the backend and render its result.
    ///
    /// Overlapping runs are neither prevented nor sequenced; whichever
    /// response lands last owns the page.
    pub async fn run_test(&self, kind: TestKind) -> RunOutcome {
        let run_id = uuid::Uuid::new_v4();
        tracing::info!(%run_id, test_type = %kind, "Starting test run");

        self.page.set_display(ElementId::ResultsContainer, Display::None);
        self.page.set_display(ElementId::LoadingSpinner, Display::Block);
        self.set_badge("Running...", "badge bg-warning");

        match self.api.run_test(&kind).await {
            Ok(data) => {
                self.page.set_display(ElementId::LoadingSpinner, Display::None);
                self.page
                    .set_display(ElementId::ResultsContainer, Display::Block);

                display_results(&self.page, &data, &kind);

                tracing::info!(
                    %run_id,
                    test_type = %kind,
                    status = data.status().unwrap_or("unknown"),
                    "Test run completed"
                );

                if data.is_success() {
                    self.set_badge("Success", "badge bg-success");
                    RunOutcome::Success(data)
                } else {
                    self.set_badge("Failed", "badge bg-danger");
                    RunOutcome::Failed(data)
                }
            }
            Err(e) => {
                tracing::error!(%run_id, test_type = %kind, error = %e, "Test failed");
                let message = e.to_string();

                self.page.set_display(ElementId::LoadingSpinner, Display::None);
                self.page
                    .set_display(ElementId::ResultsContainer, Display::Block);
                self.page
                    .set_html(ElementId::ResultsContainer, render_error_panel(&message));
                self.set_badge("Error", "badge bg-danger");

                RunOutcome::Error(message)
            }
        }
    }

    fn set_badge(&self, text: &str, class_name: &str) {
        self.page.update(ElementId::TestStatus, |el| {
            el.text_content = text.to_string();
            el.class_name = class_name.to_string();
        });
    }
}
