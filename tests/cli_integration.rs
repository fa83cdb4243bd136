//! CLI integration tests
//!
//! End-to-end tests for the `kvtest` binary using assert_cmd.

mod common;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::MockServer;

/// Get the kvtest binary for testing
fn kvtest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kvtest").unwrap();
    // Keep the environment from leaking into the run.
    cmd.env_remove("KVTEST_API_URL")
        .env_remove("KVTEST_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_output() {
    kvtest_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kvtest"));
}

#[test]
fn test_help_shows_all_commands() {
    kvtest_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_run_help() {
    kvtest_cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--html"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_run_requires_type() {
    kvtest_cmd().arg("run").assert().failure();
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kvtest.toml");

    kvtest_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[api]"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kvtest.toml");
    std::fs::write(&config_path, "existing").unwrap();

    kvtest_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_api_url_rejected() {
    kvtest_cmd()
        .args(["status", "--api-url", "localhost:5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn test_status_unreachable_reports_disconnected() {
    kvtest_cmd()
        .args(["status", "--api-url", "http://127.0.0.1:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disconnected"));
}

#[test]
fn test_run_unreachable_exits_nonzero() {
    kvtest_cmd()
        .args(["run", "simple", "--api-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Network error"));
}

#[test]
fn test_completions_bash() {
    kvtest_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kvtest"));
}

#[tokio::test]
async fn test_run_html_against_mock_backend() {
    let server = MockServer::start().await;
    mount_test_result(&server, 200, ping_payload()).await;
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        kvtest_cmd()
            .args(["run", "simple", "--html", "--api-url", &uri])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Ping Test Passed"))
        .stdout(predicate::str::contains("(0.42ms)"));
}

#[tokio::test]
async fn test_status_json_against_mock_backend() {
    let server = mock_backend_with_status(status_payload(true, "2024-05-01T10:15:30Z")).await;
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        kvtest_cmd()
            .args(["status", "--json", "--api-url", &uri])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["connectionStatus"]["text_content"], "Connected");
}
