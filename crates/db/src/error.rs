//! Store-level error type.
//!
//! Wraps [`CoreError`] for domain errors (not-found, conflict, validation)
//! and passes lower-level storage failures through untouched. The store
//! layer never retries or compensates; the caller decides what to do.

use ctms_core::error::CoreError;

/// Error returned by every store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error from `ctms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for store return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Classify a sqlx error, turning unique-constraint violations into
    /// domain conflicts.
    ///
    /// PostgreSQL unique violations carry error code 23505. Violations of
    /// constraints named `uq_*` become `Conflict` with the given message;
    /// the loser of a concurrent check-then-write race lands here instead
    /// of in the store-level pre-check. Everything else passes through.
    pub fn from_sqlx(err: sqlx::Error, conflict_msg: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
            {
                return StoreError::Core(CoreError::Conflict(conflict_msg.to_string()));
            }
        }
        tracing::error!(error = %err, "Database error");
        StoreError::Database(err)
    }
}
