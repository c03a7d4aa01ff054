//! Integration tests for the HTTP front-door: health endpoint, CORS
//! headers, preflight short-circuit, and fallback behavior.

use std::time::Duration;

use reqwest::Method;

mod common;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
const ALLOW_HEADERS: &str = "Content-Type";

fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        ALLOW_ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        ALLOW_METHODS
    );
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        ALLOW_HEADERS
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = common::start_server().await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_cors_headers(&response);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert_eq!(body, "✅ Bookstore API is running\n");
}

#[tokio::test]
async fn test_preflight_short_circuit() {
    let addr = common::start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .request(Method::OPTIONS, format!("http://{}/any/path", addr))
        .header("Origin", "https://example.test")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_cors_headers(&response);

    let body = response.text().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_unmatched_path_carries_cors_headers() {
    let addr = common::start_server().await;

    let response = reqwest::get(format!("http://{}/does-not-exist", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_method_not_allowed_carries_cors_headers() {
    let addr = common::start_server().await;
    let client = reqwest::Client::new();

    // Only GET is registered on the root path.
    let response = client
        .post(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 405);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_preflight_never_reaches_handlers() {
    let addr = common::start_server().await;
    let client = reqwest::Client::new();

    // A preflight against the create endpoint must not create anything.
    let response = client
        .request(Method::OPTIONS, format!("http://{}/book/", addr))
        .header("Origin", "https://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let books: Vec<serde_json::Value> = client
        .get(format!("http://{}/book/", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_bind_failure_exits_nonzero() {
    // Occupy the service port on both loopback addresses so the binary
    // cannot bind "localhost:9010" via either address family.
    let v4_guard = tokio::net::TcpListener::bind("127.0.0.1:9010").await.unwrap();
    let v6_guard = tokio::net::TcpListener::bind("[::1]:9010").await.ok();

    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_bookstore-api"))
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .unwrap();

    // Bind failure must terminate the process within one second.
    let status = tokio::time::timeout(Duration::from_secs(1), child.wait())
        .await
        .expect("process did not exit within 1s of bind failure")
        .unwrap();

    assert!(!status.success());

    drop(v4_guard);
    drop(v6_guard);
}
