//! Redcouch HTTP API.
//!
//! The router exposes the standalone server routes (`/api`, `/api/echo`,
//! `/api/ping`, `/smoke`) and routes everything else through the
//! canned-response dispatcher, which owns `/`, `/health`, and the 404/405
//! branches. When a greeting recorder is configured, its result is merged
//! into every dispatcher response body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod secrets;
pub mod server;

use std::sync::Arc;

use redcouch_core::{Clock, GreetingStore, RealClock};

pub use config::Config;
pub use server::{create_router, start_server};

/// Service name reported by the health route.
pub const SERVICE_NAME: &str = "redcouch";

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Optional greeting recorder; `None` runs the dispatcher without
    /// database access (the early handler variants).
    pub recorder: Option<Arc<dyn GreetingStore>>,

    /// Clock used for response timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state with an optional recorder.
    pub fn new(recorder: Option<Arc<dyn GreetingStore>>, clock: Arc<dyn Clock>) -> Self {
        Self { recorder, clock }
    }

    /// State without a recorder, on the system clock.
    pub fn without_recorder() -> Self {
        Self::new(None, Arc::new(RealClock::new()))
    }
}
