use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{probe_cmd, scratch_dir, stderr, stdout, stdout_json};

#[tokio::test(flavor = "multi_thread")]
async fn test_send_get_json_output() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-get");
    let output = probe_cmd(&dir)
        .args(["send", "-u", &format!("{}/x", mock_server.uri()), "-o", "json"])
        .output()
        .expect("Failed to execute probe binary");

    assert!(output.status.success(), "probe failed: {}", stderr(&output));
    let result = stdout_json(&output);
    assert_eq!(result["status"], 200);
    assert_eq!(result["statusText"], "OK");
    assert_eq!(result["data"], json!({"ok": true}));
    assert!(result["durationMs"].as_u64().is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_post_text_output() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("x-api-key", "secret"))
        .and(body_string("{\"title\":\"foo\"}"))
        .respond_with(ResponseTemplate::new(201).set_body_raw("created", "text/plain"))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-post");
    let output = probe_cmd(&dir)
        .args([
            "send",
            "-X",
            "post",
            "-u",
            &format!("{}/posts", mock_server.uri()),
            "-H",
            r#"{"X-Api-Key": "secret"}"#,
            "-b",
            "{\"title\":\"foo\"}",
        ])
        .output()
        .expect("Failed to execute probe binary");

    let text = stdout(&output);
    assert!(output.status.success(), "probe failed: {}", stderr(&output));
    assert!(text.contains("status: 201 Created (success)"), "got:\n{text}");
    assert!(text.contains("duration: "), "got:\n{text}");
    assert!(text.ends_with("body:\ncreated\n"), "got:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_server_error_still_succeeds() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-503");
    let output = probe_cmd(&dir)
        .args(["send", "-u", &mock_server.uri(), "-o", "json"])
        .output()
        .expect("Failed to execute probe binary");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"], 503);
}

#[test]
fn test_send_network_error_exit_code() {
    let dir = scratch_dir("send-refused");
    let output = probe_cmd(&dir)
        .args(["send", "-u", "http://127.0.0.1:1/", "-o", "json"])
        .output()
        .expect("Failed to execute probe binary");

    assert_eq!(output.status.code(), Some(6));
    let result = stdout_json(&output);
    assert_eq!(result["status"], 0);
    assert_eq!(result["statusText"], "Network Error");
    assert_eq!(result["headers"], json!({}));
    assert!(result["data"].is_string());
}

#[test]
fn test_send_without_url_is_validation_error() {
    let dir = scratch_dir("send-no-url");
    let output = probe_cmd(&dir)
        .args(["send"])
        .output()
        .expect("Failed to execute probe binary");

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("URL required"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_send_unknown_example() {
    let dir = scratch_dir("send-bad-example");
    let output = probe_cmd(&dir)
        .args(["send", "--example", "teapot"])
        .output()
        .expect("Failed to execute probe binary");

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Example not found: teapot"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_example_with_url_override() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-example");
    let output = probe_cmd(&dir)
        .args([
            "send",
            "--example",
            "post",
            "-u",
            &format!("{}/posts", mock_server.uri()),
            "-o",
            "json",
        ])
        .output()
        .expect("Failed to execute probe binary");

    assert!(output.status.success(), "probe failed: {}", stderr(&output));
    assert_eq!(stdout_json(&output)["data"]["id"], 101);

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["title"], "foo");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_strict_headers_warns_and_continues() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-strict");
    let output = probe_cmd(&dir)
        .args([
            "send",
            "-u",
            &mock_server.uri(),
            "-H",
            "{not json",
            "--strict-headers",
        ])
        .output()
        .expect("Failed to execute probe binary");

    assert!(output.status.success(), "probe failed: {}", stderr(&output));
    assert!(
        stderr(&output).contains("sending no custom headers"),
        "got stderr:\n{}",
        stderr(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_and_save() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let dir = scratch_dir("send-save");
    let output = probe_cmd(&dir)
        .args([
            "send",
            "-u",
            &mock_server.uri(),
            "-H",
            r#"{"Accept": "text/plain"}"#,
            "--save",
            "Health check",
        ])
        .output()
        .expect("Failed to execute probe binary");
    assert!(output.status.success(), "probe failed: {}", stderr(&output));
    assert!(stderr(&output).contains("Saved endpoint 'Health check'"));

    let list = probe_cmd(&dir)
        .args(["endpoint", "list", "-o", "json"])
        .output()
        .expect("Failed to execute probe binary");
    let endpoints = stdout_json(&list);
    assert_eq!(endpoints[0]["name"], "Health check");
    assert_eq!(endpoints[0]["method"], "GET");
}
