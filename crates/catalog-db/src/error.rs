//! # Database Error Types
//!
//! Error types for catalog store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized by the operation that failed      │
//! │       │                                                                 │
//! │       │   open()            → ConnectionFailed                          │
//! │       │   provision_schema  → SchemaFailed                              │
//! │       │   add / update      → WriteRejected                             │
//! │       │   delete            → StillReferenced                           │
//! │       │   reports           → QueryFailed                               │
//! │       ▼                                                                 │
//! │  CLI (anyhow) ← Printed for the operator                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same SQLite failure means different things depending on the call: a
//! foreign key violation on insert is a bad reference, on delete it is a
//! dependent row. Repositories pick the mapping with [`DbError::on_write`] and
//! [`DbError::on_delete`]; everything else goes through `From<sqlx::Error>`.

use catalog_core::CoreError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Catalog store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store could not be opened or reached.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (permissions, missing directory)
    /// - Connection acquisition timed out
    /// - The store was closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema provisioning failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in a migration
    /// - Applied migration checksum no longer matches
    #[error("Schema provisioning failed: {0}")]
    SchemaFailed(String),

    /// Insert or update violated a NOT NULL, CHECK or foreign key constraint.
    ///
    /// ## When This Occurs
    /// - Product references a category or seller that does not exist
    /// - Product name longer than the column bound
    #[error("Write to {entity} rejected: {reason}")]
    WriteRejected { entity: String, reason: String },

    /// Delete blocked because other rows still reference this one.
    ///
    /// ## When This Occurs
    /// - Deleting a category that still has products
    /// - Deleting a seller that still has products
    #[error("{entity} {id} is still referenced by other rows")]
    StillReferenced { entity: String, id: i64 },

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Sample data could not be planned.
    #[error("Sample data: {0}")]
    Sample(#[from] CoreError),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a WriteRejected error.
    pub fn write_rejected(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        DbError::WriteRejected {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Returns a mapper for errors raised by INSERT/UPDATE statements.
    ///
    /// Constraint violations become [`DbError::WriteRejected`].
    pub fn on_write(entity: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
        move |err| {
            if let sqlx::Error::Database(db_err) = &err {
                if is_constraint(db_err.kind()) {
                    return DbError::write_rejected(entity, db_err.message());
                }
            }
            DbError::from(err)
        }
    }

    /// Returns a mapper for errors raised by DELETE statements.
    ///
    /// A foreign key violation means a dependent row still points here and
    /// becomes [`DbError::StillReferenced`].
    pub fn on_delete(entity: &'static str, id: i64) -> impl FnOnce(sqlx::Error) -> DbError {
        move |err| {
            if let sqlx::Error::Database(db_err) = &err {
                if is_reference_violation(db_err.kind(), db_err.code().as_deref()) {
                    return DbError::StillReferenced {
                        entity: entity.to_string(),
                        id,
                    };
                }
            }
            DbError::from(err)
        }
    }

    /// Maps errors raised by reporting queries.
    ///
    /// Anything that is not a connection problem is a [`DbError::QueryFailed`],
    /// including row decoding failures.
    pub fn on_query(err: sqlx::Error) -> DbError {
        match DbError::from(err) {
            DbError::Internal(msg) => DbError::QueryFailed(msg),
            other => other,
        }
    }
}

fn is_constraint(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
    )
}

/// SQLITE_CONSTRAINT_TRIGGER: what a RESTRICT action raises instead of 787.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

fn is_reference_violation(kind: ErrorKind, code: Option<&str>) -> bool {
    matches!(kind, ErrorKind::ForeignKeyViolation) || code == Some(SQLITE_CONSTRAINT_TRIGGER)
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::ConnectionFailed
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => {
                DbError::ConnectionFailed("Timed out waiting for the connection".to_string())
            }

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Store is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::SchemaFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::StillReferenced {
            entity: "category".to_string(),
            id: 3,
        };
        assert_eq!(err.to_string(), "category 3 is still referenced by other rows");

        let err = DbError::write_rejected("product", "FOREIGN KEY constraint failed");
        assert_eq!(
            err.to_string(),
            "Write to product rejected: FOREIGN KEY constraint failed"
        );
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));

        let err = DbError::on_write("seller")(sqlx::Error::PoolClosed);
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_constraint_kinds() {
        assert!(is_constraint(ErrorKind::ForeignKeyViolation));
        assert!(is_constraint(ErrorKind::CheckViolation));
        assert!(!is_constraint(ErrorKind::UniqueViolation));

        assert!(is_reference_violation(ErrorKind::ForeignKeyViolation, Some("787")));
        assert!(is_reference_violation(ErrorKind::Other, Some("1811")));
        assert!(!is_reference_violation(ErrorKind::CheckViolation, Some("275")));
    }

    #[test]
    fn test_core_error_converts() {
        let err: DbError = CoreError::empty_pool("category").into();
        assert!(matches!(err, DbError::Sample(_)));
    }
}
