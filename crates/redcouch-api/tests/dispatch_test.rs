//! Canned-response dispatcher tests over the full router.
//!
//! No recorder is wired here, matching the early handler variants: every
//! branch of the method/path table must produce its fixed body, status,
//! and headers.

use axum::{http::StatusCode, Router};
use redcouch_api::{create_router, AppState};
use redcouch_testing::send_json;
use serde_json::json;

fn app() -> Router {
    create_router(AppState::without_recorder())
}

#[tokio::test]
async fn get_root_returns_success_welcome() {
    let (status, headers, body) = send_json(app(), "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to RedCouch API");
    assert_eq!(body["status"], "success");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn get_health_reports_the_service_name() {
    let (status, _, body) = send_json(app(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "redcouch");
}

#[tokio::test]
async fn get_unknown_path_is_404_and_names_the_path() {
    let (status, headers, body) = send_json(app(), "GET", "/no/such/route", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(
        body["message"].as_str().expect("message is a string").contains("/no/such/route"),
        "404 message must include the path, got: {}",
        body["message"]
    );
    // Error responses carry the same fixed headers as success responses.
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn post_reflects_the_parsed_body() {
    let (status, _, body) = send_json(app(), "POST", "/", Some(r#"{"a":1}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "POST request received");
    assert_eq!(body["data"], json!({"a": 1}));
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn post_is_accepted_on_any_path() {
    let (status, _, body) = send_json(app(), "POST", "/anything/else", Some(r#"{"b":2}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"b": 2}));
}

#[tokio::test]
async fn post_with_malformed_json_is_tolerated() {
    let (status, _, body) = send_json(app(), "POST", "/", Some("{definitely not json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn post_without_a_body_gets_an_empty_object() {
    let (status, _, body) = send_json(app(), "POST", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn delete_is_405_and_names_the_method() {
    let (status, _, body) = send_json(app(), "DELETE", "/", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method Not Allowed");
    assert!(
        body["message"].as_str().expect("message is a string").contains("DELETE"),
        "405 message must include the method, got: {}",
        body["message"]
    );
}

#[tokio::test]
async fn put_is_405_too() {
    let (status, _, body) = send_json(app(), "PUT", "/health", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body["message"].as_str().expect("message is a string").contains("PUT"));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let (_, headers, _) = send_json(app(), "GET", "/", None).await;
    assert!(headers.contains_key("x-request-id"));
}
