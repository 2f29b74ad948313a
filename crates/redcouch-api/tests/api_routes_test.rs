//! Standalone server route tests: `/api`, `/api/echo`, `/api/ping`, and
//! the `/smoke` responder.

use std::sync::Arc;

use axum::{http::StatusCode, Router};
use chrono::{DateTime, Utc};
use redcouch_api::{create_router, AppState};
use redcouch_core::TestClock;
use redcouch_testing::send_json;
use serde_json::json;

fn app() -> Router {
    create_router(AppState::without_recorder())
}

#[tokio::test]
async fn api_root_greets() {
    let (status, _, body) = send_json(app(), "GET", "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from RedCouch API");
}

#[tokio::test]
async fn api_echo_reflects_the_posted_json() {
    let (status, _, body) =
        send_json(app(), "POST", "/api/echo", Some(r#"{"greeting":"hi","n":3}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["you_sent"], json!({"greeting": "hi", "n": 3}));
}

#[tokio::test]
async fn api_echo_tolerates_malformed_json() {
    let (status, _, body) = send_json(app(), "POST", "/api/echo", Some("not json at all")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["you_sent"], json!({}));
}

#[tokio::test]
async fn api_ping_answers_ok() {
    let (status, _, body) = send_json(app(), "GET", "/api/ping", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn smoke_reports_version_time_and_echo() {
    let pinned: DateTime<Utc> = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
        .expect("valid timestamp")
        .with_timezone(&Utc);
    let clock = TestClock::at(pinned);
    let state = AppState::new(None, Arc::new(clock));
    let app = create_router(state);

    let (status, _, body) = send_json(app, "GET", "/smoke?probe=1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from redcouch");
    assert_eq!(body["utc_time"], pinned.to_rfc3339());
    assert!(!body["version"].as_str().expect("version is a string").is_empty());
    assert_eq!(body["echo"]["method"], "GET");
    assert_eq!(body["echo"]["path"], "/smoke");
    assert_eq!(body["echo"]["query"], "probe=1");
}

#[tokio::test]
async fn api_routes_carry_the_fixed_headers_too() {
    let (_, headers, _) = send_json(app(), "GET", "/api/ping", None).await;

    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
}
