//! Test infrastructure for redcouch.
//!
//! Provides an in-memory greeting store with failure injection and a
//! helper for driving a router and decoding its JSON responses. Keeps
//! integration tests free of database requirements while exercising the
//! real handler and middleware stack.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{body::Body, Router};
use chrono::{DateTime, Utc};
use http::{HeaderMap, Request, StatusCode};
use redcouch_core::{
    Clock, CoreError, GreetingId, GreetingStore, RealClock, RecordedGreeting, Result,
};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory [`GreetingStore`] for router tests.
///
/// Ids start at 1 and increase by one per recorded row, mirroring the
/// `serial` column of the real table. [`InMemoryGreetingStore::fail_next`]
/// arms a one-shot error to exercise the 500 path.
#[derive(Debug)]
pub struct InMemoryGreetingStore {
    rows: Mutex<Vec<(String, DateTime<Utc>)>>,
    fail_next: AtomicBool,
    clock: Arc<dyn Clock>,
}

impl InMemoryGreetingStore {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(RealClock::new()))
    }

    /// Creates an empty store stamping rows from the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { rows: Mutex::new(Vec::new()), fail_next: AtomicBool::new(false), clock }
    }

    /// Arms a one-shot failure for the next `record` call.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of rows recorded so far.
    pub fn len(&self) -> usize {
        self.lock_rows().len()
    }

    /// Whether no rows have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Messages recorded, in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.lock_rows().iter().map(|(message, _)| message.clone()).collect()
    }

    fn lock_rows(&self) -> std::sync::MutexGuard<'_, Vec<(String, DateTime<Utc>)>> {
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for InMemoryGreetingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GreetingStore for InMemoryGreetingStore {
    async fn record(&self, message: &str) -> Result<RecordedGreeting> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CoreError::Connection("injected failure".to_string()));
        }

        let now = self.clock.now_utc();
        let mut rows = self.lock_rows();
        rows.push((message.to_string(), now));

        let id = i32::try_from(rows.len()).unwrap_or(i32::MAX);
        let total_rows = i64::try_from(rows.len()).unwrap_or(i64::MAX);

        Ok(RecordedGreeting { id: GreetingId(id), inserted_at: now, total_rows })
    }
}

/// Sends one request through the router and returns status, headers, and
/// the parsed JSON body (`Value::Null` for empty bodies).
///
/// # Panics
///
/// Panics when the request cannot be built, the router errors, or a
/// non-empty body is not valid JSON. Test-only code: failing loudly beats
/// threading a `Result` through every assertion.
pub async fn send_json(
    app: Router,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
        .expect("request must build");

    let response = app.oneshot(request).await.expect("router must respond");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body must be JSON")
    };

    (status, headers, json)
}
