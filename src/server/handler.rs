//! HTTP handlers for the web console

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::sync::Arc;

use super::ConsoleState;
use crate::api::RunTestRequest;
use crate::controller::RunOutcome;
use crate::page::{ElementId, PageSnapshot};
use crate::render::format::escape_html;

/// Embedded console assets from assets/ directory
#[derive(RustEmbed)]
#[folder = "assets/"]
struct ConsoleAssets;

/// Result of `POST /actions/test`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    /// Badge text the run ended with
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub page: PageSnapshot,
}

impl RunResponse {
    fn new(outcome: RunOutcome, page: PageSnapshot) -> Self {
        let error = match &outcome {
            RunOutcome::Error(message) => Some(message.clone()),
            RunOutcome::Success(_) | RunOutcome::Failed(_) => None,
        };
        Self {
            badge: outcome.badge().to_string(),
            error,
            page,
        }
    }
}

/// Fill the page template with element state.
///
/// Each element `x` exposes `{{x.class}}`, `{{x.text}}`, `{{x.html}}` and
/// `{{x.style}}`. Text and classes are escaped; inner HTML is inserted as-is.
pub fn render_page(template: &str, snapshot: &PageSnapshot) -> String {
    let mut html = template.to_string();
    for id in ElementId::ALL {
        let element = snapshot.get(&id).cloned().unwrap_or_default();
        let dom_id = id.dom_id();
        let style = element
            .display
            .map(|d| format!("display: {}", d.as_css()))
            .unwrap_or_default();

        html = html
            .replace(
                &format!("{{{{{}.class}}}}", dom_id),
                &escape_html(&element.class_name),
            )
            .replace(
                &format!("{{{{{}.text}}}}", dom_id),
                &escape_html(&element.text_content),
            )
            .replace(&format!("{{{{{}.html}}}}", dom_id), &element.inner_html)
            .replace(&format!("{{{{{}.style}}}}", dom_id), &style);
    }
    html
}

/// Serves the console page with the current element states
pub async fn page_handler(State(state): State<Arc<ConsoleState>>) -> Response {
    match ConsoleAssets::get("index.html") {
        Some(content) => match std::str::from_utf8(&content.data) {
            Ok(template) => {
                let snapshot = state.controller.page().snapshot();
                Html(render_page(template, &snapshot)).into_response()
            }
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid HTML encoding").into_response(),
        },
        None => (StatusCode::INTERNAL_SERVER_ERROR, "Console HTML not found").into_response(),
    }
}

/// Serves static assets (CSS, JS, etc.)
pub async fn assets_handler(Path(path): Path<String>) -> Response {
    match ConsoleAssets::get(&path) {
        Some(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime_type.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}

/// Serves the current element states
pub async fn snapshot_handler(State(state): State<Arc<ConsoleState>>) -> Json<PageSnapshot> {
    Json(state.controller.page().snapshot())
}

/// Refreshes connection status, then serves the element states
pub async fn refresh_handler(State(state): State<Arc<ConsoleState>>) -> Json<PageSnapshot> {
    state.controller.refresh_status().await;
    Json(state.controller.page().snapshot())
}

/// Runs a test, then serves the outcome and element states
pub async fn run_handler(
    State(state): State<Arc<ConsoleState>>,
    Json(request): Json<RunTestRequest>,
) -> Json<RunResponse> {
    let outcome = state.controller.run_test(request.kind).await;
    Json(RunResponse::new(outcome, state.controller.page().snapshot()))
}
