//! Storage layer for greeting records.
//!
//! All SQL lives in this module. The HTTP layer depends on the
//! [`GreetingStore`] trait rather than a concrete backend, so deployments
//! without a database (and tests) can swap the backing store without
//! touching the handlers.

use async_trait::async_trait;

use crate::{error::Result, models::RecordedGreeting};

pub mod greetings;

pub use greetings::PgGreetingStore;

/// Seam over greeting persistence.
#[async_trait]
pub trait GreetingStore: Send + Sync + std::fmt::Debug {
    /// Ensures the greetings table exists, inserts one row carrying
    /// `message`, and returns the stored row's id and timestamp plus the
    /// current total row count.
    ///
    /// The count is advisory: it is read after the insert without a
    /// transaction, so concurrent inserts may already be included.
    async fn record(&self, message: &str) -> Result<RecordedGreeting>;
}
