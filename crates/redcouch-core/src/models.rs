//! Domain models for greeting records.
//!
//! A greeting is the single persisted row type this system ever writes:
//! created on every inbound request in recorder-backed deployments, never
//! updated, never deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strongly-typed greeting row identifier.
///
/// Wraps the `serial` primary key assigned by the storage layer. Ids are
/// strictly increasing and never reused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(transparent)]
pub struct GreetingId(pub i32);

impl fmt::Display for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for GreetingId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A persisted greeting row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Greeting {
    /// Storage-assigned identifier.
    pub id: GreetingId,

    /// Message text stored with the row.
    #[sqlx(rename = "msg")]
    pub message: String,

    /// Insertion timestamp, defaulted by the database.
    #[sqlx(rename = "ts")]
    pub created_at: DateTime<Utc>,
}

/// Result of recording one greeting.
///
/// `total_rows` is advisory: it is read after the insert without a
/// transaction, so a concurrent insert can already be reflected in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedGreeting {
    /// Identifier of the inserted row.
    pub id: GreetingId,

    /// Timestamp the storage layer assigned to the row.
    pub inserted_at: DateTime<Utc>,

    /// Table row count observed just after the insert.
    pub total_rows: i64,
}
