//! Error types and result handling for greeting storage.
//!
//! The service exposes a single failure mode to callers (any error becomes
//! a fixed 500 response), so the taxonomy here only distinguishes what the
//! server-side log needs: failures to reach the database versus failures
//! of a statement on an established connection.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for storage operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Connecting to the database failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// A statement failed after the connection was established.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Configuration(_) => {
                Self::Connection(err.to_string())
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_classify_as_connection_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = CoreError::from(sqlx::Error::Io(io));
        assert!(matches!(err, CoreError::Connection(_)));
    }

    #[test]
    fn statement_failures_classify_as_database_errors() {
        let err = CoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, CoreError::Database(_)));
    }

    #[test]
    fn display_includes_the_underlying_message() {
        let err = CoreError::Database("relation does not exist".to_string());
        assert!(err.to_string().contains("relation does not exist"));
    }
}
