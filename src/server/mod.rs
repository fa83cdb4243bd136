//! Web console
//!
//! Serves the console page with the current element states rendered in, and
//! exposes the controller's two operations as actions.
//!
//! ## Endpoints
//!
//! - `GET /` - console page
//! - `GET /assets/*path` - embedded static assets
//! - `GET /page` - JSON snapshot of every element
//! - `POST /actions/status` - refresh connection status, returns the snapshot
//! - `POST /actions/test` - run a test (`{"type": <token>}`), returns outcome and snapshot

pub mod handler;

pub use handler::{
    assets_handler, page_handler, refresh_handler, render_page, run_handler, snapshot_handler,
    RunResponse,
};

use crate::controller::Controller;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared state for console handlers.
pub struct ConsoleState {
    pub controller: Controller,
}

impl ConsoleState {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }
}

/// Create the console router with all endpoints configured.
pub fn create_router(state: Arc<ConsoleState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/assets/*path", get(assets_handler))
        .route("/page", get(snapshot_handler))
        .route("/actions/status", post(refresh_handler))
        .route("/actions/test", post(run_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
