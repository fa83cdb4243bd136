//! Benchmark renderer.

use super::format::{fixed, or_empty};
use crate::api::TestResult;

/// Metrics grid on pass, error line on failure.
pub fn render_performance(data: &TestResult) -> String {
    let passed = data.is_pass();
    let body = if passed {
        metrics_grid(data)
    } else {
        format!(
            r#"<p class="mb-0 mt-2"><strong>Error:</strong> {}</p>"#,
            data.error().unwrap_or_default()
        )
    };

    format!(
        r#"<div class="alert {alert}">
    <h5>
        <i class="bi bi-{icon}"></i>
        Performance Test {verdict}
    </h5>
    {body}
</div>"#,
        alert = if passed { "alert-success" } else { "alert-danger" },
        icon = if passed { "check-circle-fill" } else { "x-circle-fill" },
        verdict = if passed { "Passed" } else { "Failed" },
    )
}

fn metrics_grid(data: &TestResult) -> String {
    format!(
        r#"<div class="row mt-3">
        <div class="col-md-3">
            <strong>Iterations:</strong><br>
            {iterations}
        </div>
        <div class="col-md-3">
            <strong>Total Operations:</strong><br>
            {total_operations}
        </div>
        <div class="col-md-3">
            <strong>Ops/Second:</strong><br>
            {ops_per_second}
        </div>
        <div class="col-md-3">
            <strong>Avg Latency:</strong><br>
            {avg_latency}ms
        </div>
    </div>
    <div class="row mt-2">
        <div class="col-md-4">
            <small><strong>SET operations:</strong> {set}</small>
        </div>
        <div class="col-md-4">
            <small><strong>GET operations:</strong> {get}</small>
        </div>
        <div class="col-md-4">
            <small><strong>DELETE operations:</strong> {delete}</small>
        </div>
    </div>"#,
        iterations = or_empty(data.field("iterations")),
        total_operations = or_empty(data.field("total_operations")),
        ops_per_second = fixed(data.number("ops_per_second").unwrap_or(0.0), 2),
        avg_latency = fixed(data.number("avg_latency_ms").unwrap_or(0.0), 2),
        set = operation_count(data, "set"),
        get = operation_count(data, "get"),
        delete = operation_count(data, "delete"),
    )
}

fn operation_count(data: &TestResult, op: &str) -> String {
    data.field("operations")
        .and_then(|ops| ops.get(op))
        .map(crate::api::types::display_value)
        .unwrap_or_default()
}
