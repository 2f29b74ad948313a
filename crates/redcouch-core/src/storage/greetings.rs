//! Postgres-backed greeting store.
//!
//! Opens a dedicated connection per call and closes it before returning,
//! on success and error paths alike. There is no pooling: each invocation
//! is independent and the host environment bounds its lifetime.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

use crate::{
    error::Result,
    models::{GreetingId, RecordedGreeting},
    storage::GreetingStore,
};

const ENSURE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS greetings (
    id SERIAL PRIMARY KEY,
    msg TEXT NOT NULL,
    ts TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const INSERT_ROW: &str = "INSERT INTO greetings (msg) VALUES ($1) RETURNING id, ts";

const COUNT_ROWS: &str = "SELECT COUNT(*) FROM greetings";

/// Postgres implementation of [`GreetingStore`].
#[derive(Debug, Clone)]
pub struct PgGreetingStore {
    dsn: String,
}

impl PgGreetingStore {
    /// Creates a store that connects to the given DSN on every call.
    pub fn new(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }

    /// Opens a connection and verifies it with a trivial query.
    ///
    /// Used once at startup to fail fast on bad credentials.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connect().await?;
        let outcome = sqlx::query("SELECT 1").execute(&mut conn).await;
        Self::close(conn).await;
        outcome?;
        Ok(())
    }

    async fn connect(&self) -> Result<PgConnection> {
        Ok(PgConnection::connect(&self.dsn).await?)
    }

    /// Runs the ensure/insert/count sequence on an open connection.
    async fn record_on(conn: &mut PgConnection, message: &str) -> Result<RecordedGreeting> {
        sqlx::query(ENSURE_TABLE).execute(&mut *conn).await?;

        let (id, inserted_at): (GreetingId, DateTime<Utc>) = sqlx::query_as(INSERT_ROW)
            .bind(message)
            .fetch_one(&mut *conn)
            .await?;

        // Advisory: a concurrent insert between the write and this read is
        // acceptable.
        let total_rows: i64 = sqlx::query_scalar(COUNT_ROWS).fetch_one(&mut *conn).await?;

        Ok(RecordedGreeting { id, inserted_at, total_rows })
    }

    async fn close(conn: PgConnection) {
        if let Err(error) = conn.close().await {
            warn!(%error, "greeting store connection did not close cleanly");
        }
    }
}

#[async_trait]
impl GreetingStore for PgGreetingStore {
    async fn record(&self, message: &str) -> Result<RecordedGreeting> {
        let mut conn = self.connect().await?;
        let outcome = Self::record_on(&mut conn, message).await;
        Self::close(conn).await;

        if let Ok(recorded) = &outcome {
            debug!(id = %recorded.id, total_rows = recorded.total_rows, "greeting recorded");
        }
        outcome
    }
}
