//! Result renderers.
//!
//! [`display_results`] picks a renderer from the test-type token the caller
//! asked for, never from the payload shape:
//!
//! | token         | renderer                          | metrics row |
//! |---------------|-----------------------------------|-------------|
//! | `full`        | suite summary + per-test blocks   | shown       |
//! | `simple`      | ping banner                       | hidden      |
//! | `performance` | benchmark grid                    | hidden      |
//! | anything else | pretty-printed JSON               | hidden      |
//!
//! A `full` payload without a `tests` object falls back to the JSON dump.

pub mod details;
pub mod format;
pub mod performance;
pub mod simple;
pub mod suite;

pub use details::{format_test_details, plain_test_details};
pub use performance::render_performance;
pub use simple::render_simple;
pub use suite::render_full_suite;

use crate::api::{TestKind, TestResult};
use crate::page::{Display, ElementId, Page};
use format::{fixed, or_placeholder};

/// Render `data` into the results container and update the metrics row.
pub fn display_results(page: &Page, data: &TestResult, kind: &TestKind) {
    match kind {
        TestKind::Full if data.tests().is_some() => {
            page.set_html(ElementId::ResultsContainer, render_full_suite(data));
            update_metrics_row(page, data);
        }
        TestKind::Simple => {
            page.set_html(ElementId::ResultsContainer, render_simple(data));
            page.set_display(ElementId::MetricsRow, Display::None);
        }
        TestKind::Performance => {
            page.set_html(ElementId::ResultsContainer, render_performance(data));
            page.set_display(ElementId::MetricsRow, Display::None);
        }
        _ => {
            page.set_html(ElementId::ResultsContainer, render_json_dump(data));
            page.set_display(ElementId::MetricsRow, Display::None);
        }
    }
}

fn update_metrics_row(page: &Page, data: &TestResult) {
    page.set_display(ElementId::MetricsRow, Display::Flex);
    page.set_text(
        ElementId::TestsPassed,
        or_placeholder(data.present("tests_passed"), "0"),
    );
    page.set_text(
        ElementId::TestsFailed,
        or_placeholder(data.present("tests_failed"), "0"),
    );
    page.set_text(
        ElementId::TotalDuration,
        format!(
            "{}ms",
            fixed(data.number("total_duration_ms").unwrap_or(0.0), 2)
        ),
    );

    let ops_per_second = data
        .present_path(&["tests", "performance", "ops_per_second"])
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    page.set_text(ElementId::OpsPerSec, fixed(ops_per_second, 0));
}

/// Raw payload as indented JSON.
pub fn render_json_dump(data: &TestResult) -> String {
    format!(
        r#"<div class="json-output">
    <pre>{}</pre>
</div>"#,
        data.to_json_pretty()
    )
}

/// Panel shown when the request itself failed.
pub fn render_error_panel(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">
    <i class="bi bi-exclamation-triangle-fill"></i>
    <strong>Error:</strong> {}
</div>"#,
        message
    )
}
