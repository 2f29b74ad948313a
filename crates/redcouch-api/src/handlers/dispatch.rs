//! Fallback handler driving the canned-response table.
//!
//! Every request not claimed by an explicit route lands here. The handler
//! reads the body, consults the dispatch table, invokes the recorder when
//! one is wired, and merges the recording into the response. Any failure
//! along the way collapses into the fixed 500 body.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

use crate::{dispatch, AppState};

/// Requests past this size fail the body read and map to a 500.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Dispatches a request through the canned-response table.
#[instrument(
    name = "dispatch_request",
    skip_all,
    fields(method = %req.method(), path = %req.uri().path())
)]
pub async fn dispatch_request(State(state): State<AppState>, req: Request) -> Response {
    match process(&state, req).await {
        Ok(canned) => canned.into_response(),
        Err(error) => {
            error!(%error, "request processing failed");
            dispatch::internal_error().into_response()
        },
    }
}

async fn process(state: &AppState, req: Request) -> anyhow::Result<dispatch::Canned> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let body = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES).await?;
    let body_text = (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned());

    let mut canned = dispatch::dispatch(&method, &path, body_text.as_deref());

    if let Some(recorder) = &state.recorder {
        let recorded = recorder.record(&format!("{method} {path}")).await?;
        canned.merge_recording(&recorded);
    }

    info!(status = canned.status.as_u16(), "dispatched");
    Ok(canned)
}
