//! Output formatting helpers for CLI commands

use crate::api::types::display_value;
use crate::api::{ConnectionStatus, TestResult};
use crate::controller::{format_local_time, RunOutcome};
use crate::render::format::{fixed, humanize_name};
use crate::render::plain_test_details;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// One-line connectivity report, e.g. `● Connected (last check 10:15:30 AM)`.
pub fn format_status_line(status: &ConnectionStatus) -> String {
    let (dot, label) = if status.connected {
        ("●".green(), "Connected".green().bold())
    } else {
        ("●".red(), "Disconnected".red().bold())
    };
    format!(
        "{} {} (last check {})",
        dot,
        label,
        format_local_time(&status.timestamp)
    )
}

/// Badge text colored the way the console colors it.
pub fn format_badge(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Success(_) => outcome.badge().green().bold().to_string(),
        RunOutcome::Failed(_) | RunOutcome::Error(_) => outcome.badge().red().bold().to_string(),
    }
}

/// Per-test table for a full-suite payload.
pub fn format_suite_table(tests: &[(&str, TestResult)]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Test", "Status", "Details", "Duration"]);

    for (name, result) in tests {
        let status = if result.is_pass() {
            "pass".green().to_string()
        } else {
            result.status().unwrap_or("fail").red().to_string()
        };

        let duration = result
            .duration_ms()
            .map(|d| format!("{}ms", fixed(d, 2)))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(humanize_name(name)),
            Cell::new(status),
            Cell::new(plain_test_details(name, result)),
            Cell::new(duration),
        ]);
    }

    table.to_string()
}

/// Field/value table for any other payload, keys in payload order.
pub fn format_fields_table(result: &TestResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    for (key, value) in result.fields() {
        table.add_row(vec![Cell::new(key), Cell::new(display_value(value))]);
    }

    table.to_string()
}

/// Terminal summary of a run: badge, suite banner if any, and a result table.
pub fn format_run_summary(outcome: &RunOutcome) -> String {
    let mut lines = vec![format!("Test status: {}", format_badge(outcome))];

    match outcome {
        RunOutcome::Error(message) => {
            lines.push(format!("{} {}", "Error:".red().bold(), message));
        }
        RunOutcome::Success(result) | RunOutcome::Failed(result) => {
            if let Some(tests) = result.tests() {
                lines.push(crate::render::suite::summary_line(result));
                lines.push(format_suite_table(&tests));
            } else {
                lines.push(format_fields_table(result));
            }
        }
    }

    lines.join("\n")
}
