//! Standalone server routes and the smoke-test responder.
//!
//! These routes predate the dispatcher variants and keep their original
//! shapes: no recorder, fixed bodies. `/smoke` echoes the inbound request
//! line for console testing of a fresh deployment.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use serde_json::json;
use tracing::instrument;

use crate::{dispatch::parse_body, AppState};

/// Greeting route for the standalone server variant.
#[instrument(name = "api_hello")]
pub async fn api_hello() -> impl IntoResponse {
    Json(json!({ "message": "Hello from RedCouch API" }))
}

/// Echoes the POSTed JSON body back to the caller.
///
/// Malformed or absent bodies are tolerated and echoed as an empty object.
#[instrument(name = "api_echo", skip(body))]
pub async fn api_echo(body: Bytes) -> impl IntoResponse {
    let text = String::from_utf8_lossy(&body);
    Json(json!({ "you_sent": parse_body(Some(text.as_ref())) }))
}

/// Liveness-style ping.
#[instrument(name = "api_ping")]
pub async fn api_ping() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Smoke-test responder.
///
/// Reports the service version and current time alongside an echo of the
/// request line, so a fresh deployment can be verified from a console.
#[instrument(name = "smoke", skip_all)]
pub async fn smoke(State(state): State<AppState>, req: Request) -> impl IntoResponse {
    Json(json!({
        "message": "Hello from redcouch",
        "utc_time": state.clock.now_utc().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "echo": {
            "method": req.method().as_str(),
            "path": req.uri().path(),
            "query": req.uri().query(),
        },
    }))
}
