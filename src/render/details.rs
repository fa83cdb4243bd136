//! One-line detail text for each sub-test of a full suite.

use super::format::{fixed, or_placeholder};
use crate::api::TestResult;

/// Describe a named sub-test result in one line of markup.
///
/// An `error` field always wins over the per-name formatting. Names without a
/// dedicated format show the result as compact JSON.
pub fn format_test_details(name: &str, result: &TestResult) -> String {
    match result.error() {
        Some(error) => format!(r#"<span class="text-danger">Error: {}</span>"#, error),
        None => describe(name, result),
    }
}

/// Same text as [`format_test_details`] without the markup, for terminals.
pub fn plain_test_details(name: &str, result: &TestResult) -> String {
    match result.error() {
        Some(error) => format!("Error: {}", error),
        None => describe(name, result),
    }
}

fn describe(name: &str, result: &TestResult) -> String {
    match name {
        "connection" => result
            .message()
            .unwrap_or_else(|| "Connection test".to_string()),
        "set" | "get" => format!(
            "Key: {}, Value: {}",
            or_placeholder(result.present("key"), "N/A"),
            or_placeholder(result.present("value"), "N/A")
        ),
        "delete" => format!(
            "Key: {}, Deleted: {}",
            or_placeholder(result.present("key"), "N/A"),
            or_placeholder(result.present("deleted"), "false")
        ),
        "incr" => format!(
            "Counter value: {}",
            or_placeholder(result.present("value"), "N/A")
        ),
        "ttl" => format!(
            "TTL: {}s remaining",
            or_placeholder(result.present("ttl_remaining"), "0")
        ),
        "performance" => format!(
            "{} operations, {} ops/sec",
            or_placeholder(result.present("total_operations"), "0"),
            result
                .number("ops_per_second")
                .map(|ops| fixed(ops, 2))
                .unwrap_or_else(|| "0".to_string())
        ),
        "info" => format!(
            "Redis {}, {} clients",
            or_placeholder(result.present("redis_version"), "unknown"),
            or_placeholder(result.present("connected_clients"), "0")
        ),
        _ => result.to_json(),
    }
}
