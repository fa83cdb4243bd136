//! Ping test renderer.

use super::format::fixed;
use crate::api::TestResult;

pub fn render_simple(data: &TestResult) -> String {
    let passed = data.is_pass();
    let duration = data
        .duration_ms()
        .map(|ms| format!("{}ms", fixed(ms, 2)))
        .unwrap_or_else(|| "N/A".to_string());
    let error = data
        .error()
        .map(|e| format!(r#"<p class="mb-0 mt-2"><strong>Error:</strong> {}</p>"#, e))
        .unwrap_or_default();

    format!(
        r#"<div class="alert {alert}">
    <h5>
        <i class="bi bi-{icon}"></i>
        Ping Test {verdict}
    </h5>
    <p class="mb-0">
        Response: {message}
        ({duration})
    </p>
    {error}
</div>"#,
        alert = if passed { "alert-success" } else { "alert-danger" },
        icon = if passed { "check-circle-fill" } else { "x-circle-fill" },
        verdict = if passed { "Passed" } else { "Failed" },
        message = data.message().unwrap_or_else(|| "No response".to_string()),
    )
}
