//! Canned response selection for the request dispatcher.
//!
//! The dispatcher is a pure method-and-path table: fixed bodies and status
//! codes, no business logic. Handlers feed it the inbound request and merge
//! in the recorder result when one is wired; keeping the table free of IO
//! makes the whole contract testable without a server.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use redcouch_core::RecordedGreeting;
use serde_json::{json, Map, Value};

/// A fixed body/status pair chosen purely by method and path matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Canned {
    /// HTTP status code for the response.
    pub status: StatusCode,

    /// JSON object serialized as the response body.
    pub body: Map<String, Value>,
}

impl Canned {
    fn new(status: StatusCode) -> Self {
        Self { status, body: Map::new() }
    }

    fn with(mut self, key: &str, value: Value) -> Self {
        self.body.insert(key.to_string(), value);
        self
    }

    /// Merges the recorder result into the body, whatever the branch.
    ///
    /// The fields land in error bodies too: the recorder runs before the
    /// response is shaped, so a 404 still reports the row it created.
    pub fn merge_recording(&mut self, recorded: &RecordedGreeting) {
        self.body.insert("inserted_id".to_string(), json!(recorded.id));
        self.body.insert("inserted_at".to_string(), json!(recorded.inserted_at.to_rfc3339()));
        self.body.insert("total_rows".to_string(), json!(recorded.total_rows));
    }
}

impl IntoResponse for Canned {
    fn into_response(self) -> Response {
        (self.status, Json(Value::Object(self.body))).into_response()
    }
}

/// Selects the canned response for a method/path/body triple.
pub fn dispatch(method: &Method, path: &str, body: Option<&str>) -> Canned {
    if method == Method::GET {
        match path {
            "/" => Canned::new(StatusCode::OK)
                .with("message", json!("Welcome to RedCouch API"))
                .with("status", json!("success")),
            "/health" => Canned::new(StatusCode::OK)
                .with("status", json!("healthy"))
                .with("service", json!(crate::SERVICE_NAME)),
            _ => Canned::new(StatusCode::NOT_FOUND)
                .with("error", json!("Not Found"))
                .with("message", json!(format!("Path {path} not found"))),
        }
    } else if method == Method::POST {
        Canned::new(StatusCode::OK)
            .with("message", json!("POST request received"))
            .with("data", parse_body(body))
            .with("status", json!("success"))
    } else {
        Canned::new(StatusCode::METHOD_NOT_ALLOWED)
            .with("error", json!("Method Not Allowed"))
            .with("message", json!(format!("HTTP method {method} not supported")))
    }
}

/// Parses an optional request body, tolerating malformed JSON.
///
/// Absent, empty, or unparseable bodies become an empty object; any valid
/// JSON value passes through unchanged.
pub fn parse_body(body: Option<&str>) -> Value {
    match body {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Map::new()))
        },
        _ => Value::Object(Map::new()),
    }
}

/// The fixed body returned for any processing failure.
///
/// Nothing request-specific leaks into it.
pub fn internal_error() -> Canned {
    Canned::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with("error", json!("Internal Server Error"))
        .with("message", json!("An unexpected error occurred"))
}
