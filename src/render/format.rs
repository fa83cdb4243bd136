//! Number and value formatting shared by the renderers.

use crate::api::types::display_value;
use serde_json::Value;

/// Fixed-point formatting with `digits` decimals. Ties round away from zero.
pub fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        format!("{:.*}", digits, rounded)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Display a present value, or `placeholder` when it is absent.
pub fn or_placeholder(value: Option<&Value>, placeholder: &str) -> String {
    value
        .map(display_value)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Display a present value, or an empty string.
pub fn or_empty(value: Option<&Value>) -> String {
    or_placeholder(value, "")
}

/// Underscores in test names read as spaces.
pub fn humanize_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Escape text for insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
