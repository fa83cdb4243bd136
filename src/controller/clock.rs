//! Local-time rendering of backend timestamps.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const TIME_OF_DAY: &str = "%-I:%M:%S %p";

/// Convert an ISO-8601 timestamp to a local time-of-day string.
///
/// Timestamps with an offset are converted from that offset; timestamps
/// without one are read as local time already.
pub fn format_local_time(timestamp: &str) -> String {
    parse_local(timestamp)
        .map(|t| t.format(TIME_OF_DAY).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_local(timestamp: &str) -> Option<DateTime<Local>> {
    let timestamp = timestamp.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(t.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}
