//! Payload types exchanged with the testing backend.
//!
//! Test results are open-ended JSON objects: each test routine reports its own
//! fields next to the common `status`/`message`/`error`/`duration_ms` ones.
//! [`TestResult`] therefore keeps the decoded object as-is (key order included)
//! and exposes typed accessors for the fields the renderers know about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Live connectivity report from `GET /api/ui/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    #[serde(default)]
    pub connected: bool,
    /// ISO-8601 timestamp of the backend's check
    #[serde(default)]
    pub timestamp: String,
}

impl ConnectionStatus {
    /// Disconnected status stamped with the current client time.
    pub fn disconnected_now() -> Self {
        Self {
            connected: false,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Test-type token selecting the backend routine and the client-side renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestKind {
    /// Single ping round-trip
    Simple,
    /// Set/get/delete benchmark
    Performance,
    /// Backend-orchestrated suite of named sub-tests
    Full,
    /// Any other token, passed through untouched
    Other(String),
}

impl TestKind {
    pub fn as_str(&self) -> &str {
        match self {
            TestKind::Simple => "simple",
            TestKind::Performance => "performance",
            TestKind::Full => "full",
            TestKind::Other(token) => token,
        }
    }
}

impl From<String> for TestKind {
    fn from(token: String) -> Self {
        match token.as_str() {
            "simple" => TestKind::Simple,
            "performance" => TestKind::Performance,
            "full" => TestKind::Full,
            _ => TestKind::Other(token),
        }
    }
}

impl From<TestKind> for String {
    fn from(kind: TestKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for TestKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TestKind::from(s.to_string()))
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/ui/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTestRequest {
    #[serde(rename = "type")]
    pub kind: TestKind,
}

/// A test result or full-suite aggregate as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestResult(Map<String, Value>);

impl TestResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap an arbitrary JSON value; non-objects become an empty result.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Raw field lookup, including `null` and empty values.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Field lookup that treats `null`, `false`, `0` and `""` as absent.
    pub fn present(&self, name: &str) -> Option<&Value> {
        self.field(name).filter(|v| is_present(v))
    }

    /// Nested lookup (e.g. `["operations", "set"]`) with the same absence rules.
    pub fn present_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.0.get(*first)?;
        for segment in rest {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current).filter(|v| is_present(v))
    }

    /// Present numeric field.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.present(name).and_then(Value::as_f64)
    }

    pub fn status(&self) -> Option<&str> {
        self.field("status").and_then(Value::as_str)
    }

    /// Top-level `status == "success"` (full-suite and badge semantics).
    pub fn is_success(&self) -> bool {
        self.status() == Some("success")
    }

    /// Per-test `status == "pass"`.
    pub fn is_pass(&self) -> bool {
        self.status() == Some("pass")
    }

    pub fn message(&self) -> Option<String> {
        self.present("message").map(display_value)
    }

    pub fn error(&self) -> Option<String> {
        self.present("error").map(display_value)
    }

    pub fn duration_ms(&self) -> Option<f64> {
        self.number("duration_ms")
    }

    /// Per-test results of a full-suite payload, in the order the backend sent them.
    ///
    /// Returns `None` when the payload carries no `tests` object.
    pub fn tests(&self) -> Option<Vec<(&str, TestResult)>> {
        let tests = self.field("tests")?.as_object()?;
        Some(
            tests
                .iter()
                .map(|(name, result)| (name.as_str(), TestResult::from_value(result.clone())))
                .collect(),
        )
    }

    /// Compact JSON, keys in payload order.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Two-space indented JSON, keys in payload order.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for TestResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON scalar the way it reads in the UI.
///
/// Strings are shown without quotes and integral floats without a trailing
/// `.0`; composite values fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
