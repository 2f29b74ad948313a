//! Core domain types and storage for the redcouch greeting service.
//!
//! Provides the greeting record model, error taxonomy, clock abstraction,
//! and the storage layer the HTTP handlers depend on. The HTTP surface
//! lives in `redcouch-api`; everything that touches SQL lives here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;
pub mod time;

pub use error::{CoreError, Result};
pub use models::{Greeting, GreetingId, RecordedGreeting};
pub use storage::{GreetingStore, PgGreetingStore};
pub use time::{Clock, RealClock, TestClock};
