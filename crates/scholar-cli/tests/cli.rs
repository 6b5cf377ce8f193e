//! CLI integration tests against a mock backend.
//!
//! Each test gets its own data directory, so the stored session never
//! leaks between tests or into the user's real data dir.

use std::path::Path;
use std::process::Output;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `server`, storing the session under `data`.
async fn run_cli(args: &[&str], data: &Path, server: &MockServer) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_scholar"))
        .args(args)
        .env("SCHOLAR_API_URL", server.uri())
        .env("SCHOLAR_DATA_DIR", data)
        .env_remove("SCHOLAR_PASSWORD")
        .output()
        .await
        .expect("Failed to execute CLI")
}

async fn run_cli_success(args: &[&str], data: &Path, server: &MockServer) -> String {
    let output = run_cli(args, data, server).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stored_session(data: &Path) -> Option<Value> {
    let raw = std::fs::read_to_string(data.join("auth-storage.json")).ok()?;
    serde_json::from_str(&raw).ok()
}

async fn mount_backend(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "T1",
            "user": {"id": 1, "username": "ada", "name": "Ada"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "ada",
            "name": "Ada"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

const LOGIN: &[&str] = &["auth", "login", "--username", "ada", "--password", "pw"];

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let data = tempfile::tempdir().unwrap();

    let stdout = run_cli_success(LOGIN, data.path(), &server).await;
    assert!(stdout.contains("ada"));

    assert_eq!(
        stored_session(data.path()),
        Some(json!({
            "token": "T1",
            "user": {"id": 1, "username": "ada", "name": "Ada"},
            "isAuthenticated": true
        }))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_prints_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "bad password"
        })))
        .mount(&server)
        .await;
    let data = tempfile::tempdir().unwrap();

    let output = run_cli(LOGIN, data.path(), &server).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bad password"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_after_login() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let data = tempfile::tempdir().unwrap();

    run_cli_success(LOGIN, data.path(), &server).await;
    let stdout = run_cli_success(&["auth", "whoami", "--json"], data.path(), &server).await;

    let profile: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profile["name"], "Ada");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_without_session_fails() {
    let server = MockServer::start().await;
    let data = tempfile::tempdir().unwrap();

    let output = run_cli(&["auth", "whoami"], data.path(), &server).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_profile_is_local() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let data = tempfile::tempdir().unwrap();

    run_cli_success(LOGIN, data.path(), &server).await;
    run_cli_success(
        &["auth", "update-profile", "--set", "name=Ada Lovelace"],
        data.path(),
        &server,
    )
    .await;

    let stored = stored_session(data.path()).unwrap();
    assert_eq!(stored["user"]["name"], "Ada Lovelace");
    assert_eq!(stored["user"]["id"], 1);
    assert_eq!(stored["token"], "T1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_erases_slot() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    let data = tempfile::tempdir().unwrap();

    run_cli_success(LOGIN, data.path(), &server).await;
    run_cli_success(&["auth", "logout"], data.path(), &server).await;

    assert!(!data.path().join("auth-storage.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_session_is_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token expired"
        })))
        .mount(&server)
        .await;
    let data = tempfile::tempdir().unwrap();
    std::fs::write(
        data.path().join("auth-storage.json"),
        r#"{"token":"OLD","user":{"id":1},"isAuthenticated":true}"#,
    )
    .unwrap();

    let output = run_cli(&["auth", "refresh-token"], data.path(), &server).await;

    assert!(!output.status.success());
    let stored = stored_session(data.path()).unwrap();
    assert_eq!(
        stored,
        json!({"token": null, "user": null, "isAuthenticated": false})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_guard_redirects_anonymous() {
    let server = MockServer::start().await;
    let data = tempfile::tempdir().unwrap();

    let stdout = run_cli_success(&["guard", "/courses/42"], data.path(), &server).await;

    assert!(stdout.contains("/login?from=%2Fcourses%2F42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_signs_with_session() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Biology"}
        ])))
        .mount(&server)
        .await;
    let data = tempfile::tempdir().unwrap();

    run_cli_success(LOGIN, data.path(), &server).await;
    let stdout = run_cli_success(&["get", "/subjects"], data.path(), &server).await;

    let subjects: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(subjects[0]["title"], "Biology");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_image_saved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/cell.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7, 7, 7]))
        .mount(&server)
        .await;
    let data = tempfile::tempdir().unwrap();
    let out = data.path().join("cell.png");
    let url = format!("{}/images/cell.png", server.uri());

    run_cli_success(
        &["image", &url, "--out", out.to_str().unwrap()],
        data.path(),
        &server,
    )
    .await;

    assert_eq!(std::fs::read(&out).unwrap(), vec![7, 7, 7]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_image_failure_offers_fallbacks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/broken.png"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;
    let data = tempfile::tempdir().unwrap();
    let out = data.path().join("broken.png");
    let url = format!("{}/images/broken.png", server.uri());

    let stdout = run_cli_success(
        &["image", &url, "--out", out.to_str().unwrap(), "--retries", "1"],
        data.path(),
        &server,
    )
    .await;

    assert!(stdout.contains("Open in new context"));
    assert!(stdout.contains("Open directly"));
    assert!(stdout.contains(&url));
    assert!(!out.exists());
}
