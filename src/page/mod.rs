//! In-process model of the console page.
//!
//! The console renders into a fixed set of elements identified by their DOM
//! ids. [`Page`] holds the current state of each element; the controller and
//! renderers mutate it, and the CLI and web console read snapshots of it.
//!
//! Updates are individually atomic but not sequenced: two operations running
//! at once interleave their writes and the last write wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Elements the console renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementId {
    StatusIndicator,
    ConnectionStatus,
    LastCheck,
    ResultsContainer,
    LoadingSpinner,
    TestStatus,
    MetricsRow,
    TestsPassed,
    TestsFailed,
    TotalDuration,
    OpsPerSec,
}

impl ElementId {
    pub const ALL: [ElementId; 11] = [
        ElementId::StatusIndicator,
        ElementId::ConnectionStatus,
        ElementId::LastCheck,
        ElementId::ResultsContainer,
        ElementId::LoadingSpinner,
        ElementId::TestStatus,
        ElementId::MetricsRow,
        ElementId::TestsPassed,
        ElementId::TestsFailed,
        ElementId::TotalDuration,
        ElementId::OpsPerSec,
    ];

    /// The element's `id` attribute.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::StatusIndicator => "statusIndicator",
            ElementId::ConnectionStatus => "connectionStatus",
            ElementId::LastCheck => "lastCheck",
            ElementId::ResultsContainer => "resultsContainer",
            ElementId::LoadingSpinner => "loadingSpinner",
            ElementId::TestStatus => "testStatus",
            ElementId::MetricsRow => "metricsRow",
            ElementId::TestsPassed => "testsPassed",
            ElementId::TestsFailed => "testsFailed",
            ElementId::TotalDuration => "totalDuration",
            ElementId::OpsPerSec => "opsPerSec",
        }
    }
}

/// CSS `display` values the console toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }
}

/// State of one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub class_name: String,
    /// Plain text; escaped when rendered
    pub text_content: String,
    /// Markup; inserted as-is when rendered
    pub inner_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
}

impl Element {
    fn with_class(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            ..Self::default()
        }
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }
}

/// Point-in-time copy of every element.
pub type PageSnapshot = BTreeMap<ElementId, Element>;

/// Placeholder shown in the results area before the first run.
pub const RESULTS_PLACEHOLDER: &str =
    r#"<p class="text-muted mb-0">Run a test to see results here.</p>"#;

/// Shared page state.
pub struct Page {
    elements: RwLock<PageSnapshot>,
}

impl Page {
    /// Page in its initial, never-checked state.
    pub fn new() -> Self {
        let mut elements = PageSnapshot::new();
        elements.insert(
            ElementId::StatusIndicator,
            Element::with_class("status-indicator"),
        );
        elements.insert(
            ElementId::ConnectionStatus,
            Element::with_class("fw-bold text-muted").with_text("Checking..."),
        );
        elements.insert(ElementId::LastCheck, Element::default().with_text("-"));
        elements.insert(
            ElementId::ResultsContainer,
            Element {
                inner_html: RESULTS_PLACEHOLDER.to_string(),
                ..Element::default()
            }
            .with_display(Display::Block),
        );
        elements.insert(
            ElementId::LoadingSpinner,
            Element::with_class("text-center py-4").with_display(Display::None),
        );
        elements.insert(
            ElementId::TestStatus,
            Element::with_class("badge bg-secondary").with_text("Ready"),
        );
        elements.insert(
            ElementId::MetricsRow,
            Element::with_class("row mb-4").with_display(Display::None),
        );
        elements.insert(ElementId::TestsPassed, Element::default().with_text("0"));
        elements.insert(ElementId::TestsFailed, Element::default().with_text("0"));
        elements.insert(ElementId::TotalDuration, Element::default().with_text("0ms"));
        elements.insert(ElementId::OpsPerSec, Element::default().with_text("0"));

        Self {
            elements: RwLock::new(elements),
        }
    }

    /// Current state of one element.
    pub fn element(&self, id: ElementId) -> Element {
        self.elements
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Apply a change to one element.
    pub fn update(&self, id: ElementId, f: impl FnOnce(&mut Element)) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        f(elements.entry(id).or_default());
    }

    pub fn set_text(&self, id: ElementId, text: impl Into<String>) {
        let text = text.into();
        self.update(id, |el| el.text_content = text);
    }

    pub fn set_class(&self, id: ElementId, class_name: impl Into<String>) {
        let class_name = class_name.into();
        self.update(id, |el| el.class_name = class_name);
    }

    pub fn set_html(&self, id: ElementId, html: impl Into<String>) {
        let html = html.into();
        self.update(id, |el| el.inner_html = html);
    }

    pub fn set_display(&self, id: ElementId, display: Display) {
        self.update(id, |el| el.display = Some(display));
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.elements
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
