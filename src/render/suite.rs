//! Full-suite renderer.

use super::details::format_test_details;
use super::format::{fixed, humanize_name, or_placeholder};
use crate::api::TestResult;

/// Render a full-suite payload: summary banner, then one block per sub-test.
///
/// The banner styling follows the top-level `status` field only; the counters
/// are displayed as reported.
pub fn render_full_suite(data: &TestResult) -> String {
    let suite_passed = data.is_success();
    let mut html = String::from(r#"<div class="test-results">"#);

    html.push_str(&format!(
        r#"
    <div class="alert {alert} mb-3">
        <div class="d-flex justify-content-between align-items-center">
            <div>
                <i class="bi {icon}"></i>
                <strong>Test Suite {verdict}</strong>
            </div>
            <div>
                {summary}
            </div>
        </div>
    </div>"#,
        alert = if suite_passed { "alert-success" } else { "alert-danger" },
        icon = if suite_passed {
            "bi-check-circle-fill"
        } else {
            "bi-x-circle-fill"
        },
        verdict = if suite_passed { "Passed" } else { "Failed" },
        summary = summary_line(data),
    ));

    for (name, result) in data.tests().unwrap_or_default() {
        let passed = result.is_pass();
        let icon = if passed {
            "check-circle-fill text-success"
        } else {
            "x-circle-fill text-danger"
        };
        let duration_badge = result
            .duration_ms()
            .map(|ms| format!(r#"<span class="badge bg-secondary">{}ms</span>"#, fixed(ms, 2)))
            .unwrap_or_default();

        html.push_str(&format!(
            r#"
    <div class="test-result {outcome}">
        <div class="d-flex justify-content-between align-items-start">
            <div class="flex-grow-1">
                <div class="test-name">
                    <i class="bi bi-{icon}"></i>
                    {title}
                </div>
                <div class="test-detail">
                    {detail}
                </div>
            </div>
            {duration_badge}
        </div>
    </div>"#,
            outcome = if passed { "pass" } else { "fail" },
            title = humanize_name(name),
            detail = format_test_details(name, &result),
        ));
    }

    html.push_str("\n</div>");
    html
}

/// `"{passed}/{total} tests passed ({duration}ms)"`.
pub fn summary_line(data: &TestResult) -> String {
    format!(
        "{}/{} tests passed ({}ms)",
        or_placeholder(data.field("tests_passed"), "0"),
        or_placeholder(data.field("tests_total"), "0"),
        fixed(data.number("total_duration_ms").unwrap_or(0.0), 2)
    )
}
