//! End-to-end tests for the controller: backend responses in, page state out.

mod common;

use common::*;
use kvtest::api::{ApiError, TestKind};
use kvtest::controller::{format_local_time, RunOutcome, StatusPoller};
use kvtest::page::{Display, ElementId};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

#[tokio::test]
async fn test_connected_status_updates_indicator() {
    let ts = "2024-05-01T10:15:30Z";
    let server = mock_backend_with_status(status_payload(true, ts)).await;
    let controller = http_controller(&server.uri());

    controller.refresh_status().await;

    let page = controller.page();
    assert_eq!(
        page.element(ElementId::StatusIndicator).class_name,
        "status-indicator connected"
    );
    let label = page.element(ElementId::ConnectionStatus);
    assert_eq!(label.text_content, "Connected");
    assert_eq!(label.class_name, "fw-bold text-success");
    assert_eq!(
        page.element(ElementId::LastCheck).text_content,
        format_local_time(ts)
    );
}

#[tokio::test]
async fn test_disconnected_status_updates_indicator() {
    let server = mock_backend_with_status(status_payload(false, "2024-05-01T10:15:30Z")).await;
    let controller = http_controller(&server.uri());

    controller.refresh_status().await;

    let page = controller.page();
    assert_eq!(
        page.element(ElementId::StatusIndicator).class_name,
        "status-indicator disconnected"
    );
    let label = page.element(ElementId::ConnectionStatus);
    assert_eq!(label.text_content, "Disconnected");
    assert_eq!(label.class_name, "fw-bold text-danger");
}

#[tokio::test]
async fn test_full_suite_banner_and_metrics() {
    let server = MockServer::start().await;
    mount_test_result(&server, 200, suite_payload()).await;
    let controller = http_controller(&server.uri());

    let outcome = controller.run_test(TestKind::Full).await;
    assert!(matches!(outcome, RunOutcome::Failed(_)));

    let page = controller.page();
    let html = page.element(ElementId::ResultsContainer).inner_html;
    assert!(html.contains("3/4 tests passed (12.34ms)"));
    assert!(html.contains("alert-danger"));
    assert!(html.contains("Test Suite Failed"));
    assert!(html.contains("set get"));
    assert!(html.contains(r#"<span class="text-danger">Error: key expired early</span>"#));

    assert_eq!(page.element(ElementId::MetricsRow).display, Some(Display::Flex));
    assert_eq!(page.element(ElementId::TestsPassed).text_content, "3");
    assert_eq!(page.element(ElementId::TestsFailed).text_content, "1");
    assert_eq!(page.element(ElementId::TotalDuration).text_content, "12.34ms");
    assert_eq!(page.element(ElementId::OpsPerSec).text_content, "1523");

    let badge = page.element(ElementId::TestStatus);
    assert_eq!(badge.text_content, "Failed");
    assert_eq!(badge.class_name, "badge bg-danger");
}

#[tokio::test]
async fn test_full_without_tests_falls_back_to_json_dump() {
    let server = MockServer::start().await;
    mount_test_result(&server, 200, json!({"status": "success", "note": "empty"})).await;
    let controller = http_controller(&server.uri());

    let outcome = controller.run_test(TestKind::Full).await;
    assert!(matches!(outcome, RunOutcome::Success(_)));

    let page = controller.page();
    let html = page.element(ElementId::ResultsContainer).inner_html;
    assert!(html.contains(r#"<div class="json-output">"#));
    assert!(html.contains("\"note\": \"empty\""));
    assert_eq!(page.element(ElementId::MetricsRow).display, Some(Display::None));
}

#[tokio::test]
async fn test_performance_pass_renders_grid() {
    let server = MockServer::start().await;
    mount_test_result(&server, 200, performance_payload()).await;
    let controller = http_controller(&server.uri());

    controller.run_test(TestKind::Performance).await;

    let page = controller.page();
    let html = page.element(ElementId::ResultsContainer).inner_html;
    assert!(html.contains("Performance Test Passed"));
    assert!(html.contains("1523.46"));
    assert!(html.contains("0.66ms"));
    assert_eq!(page.element(ElementId::MetricsRow).display, Some(Display::None));
}

#[tokio::test]
async fn test_unknown_test_name_detail_is_verbatim_json() {
    let server = MockServer::start().await;
    mount_test_result(
        &server,
        200,
        json!({
            "status": "success",
            "tests_passed": 1, "tests_failed": 0, "tests_total": 1,
            "total_duration_ms": 1.0,
            "tests": { "custom_check": {"status": "pass", "x": 1} }
        }),
    )
    .await;
    let controller = http_controller(&server.uri());

    controller.run_test(TestKind::Full).await;

    let html = controller
        .page()
        .element(ElementId::ResultsContainer)
        .inner_html;
    assert!(html.contains(r#"{"status":"pass","x":1}"#));
    assert!(html.contains("custom check"));
}

#[tokio::test]
async fn test_fetch_failure_shows_error_panel() {
    // Port 1 is reserved; nothing listens there in test environments.
    let controller = http_controller("http://127.0.0.1:1");

    let outcome = controller.run_test(TestKind::Simple).await;
    let RunOutcome::Error(message) = &outcome else {
        panic!("expected error outcome, got {outcome:?}");
    };
    assert!(message.starts_with("Network error"));

    let page = controller.page();
    assert_eq!(
        page.element(ElementId::LoadingSpinner).display,
        Some(Display::None)
    );
    let results = page.element(ElementId::ResultsContainer);
    assert_eq!(results.display, Some(Display::Block));
    assert!(results.inner_html.contains("alert alert-danger"));
    assert!(results.inner_html.contains(message.as_str()));
    assert_eq!(page.element(ElementId::TestStatus).text_content, "Error");
}

#[tokio::test]
async fn test_status_failure_is_disconnected() {
    let (controller, _) = scripted_controller(ScriptedApi::unreachable());

    let status = controller.refresh_status().await;

    assert!(!status.connected);
    assert_eq!(
        controller
            .page()
            .element(ElementId::ConnectionStatus)
            .text_content,
        "Disconnected"
    );
}

#[tokio::test]
async fn test_runner_forwards_token() {
    let (controller, api) = scripted_controller(ScriptedApi::new(
        Err(ApiError::Network("unused".to_string())),
        Ok(result(json!({"status": "success", "channels": 2}))),
    ));

    controller
        .run_test(TestKind::Other("pubsub".to_string()))
        .await;

    assert_eq!(
        api.requested.lock().unwrap().as_slice(),
        &[TestKind::Other("pubsub".to_string())]
    );
    let html = controller
        .page()
        .element(ElementId::ResultsContainer)
        .inner_html;
    assert!(html.contains("\"channels\": 2"));
}

#[tokio::test]
async fn test_poller_drives_page_from_backend() {
    let ts = "2024-05-01T10:15:30Z";
    let server = mock_backend_with_status(status_payload(true, ts)).await;
    let controller = http_controller(&server.uri());

    let cancel = CancellationToken::new();
    let handle = StatusPoller::with_interval(controller.clone(), Duration::from_millis(20))
        .start(cancel.clone());

    tokio::time::sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        controller
            .page()
            .element(ElementId::ConnectionStatus)
            .text_content,
        "Connected"
    );
    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() >= 2);
}
