//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── CoreError        - Sample planning failures                       │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: CoreError → DbError → CLI (anyhow) → operator                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Random assignment needs at least one candidate id.
    ///
    /// ## When This Occurs
    /// - Sample products are planned while the category table is empty
    /// - Sample products are planned while the seller table is empty
    #[error("cannot assign sample products: no {entity} rows available")]
    EmptySamplePool { entity: String },
}

impl CoreError {
    pub fn empty_pool(entity: impl Into<String>) -> Self {
        CoreError::EmptySamplePool {
            entity: entity.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::empty_pool("seller");
        assert_eq!(
            err.to_string(),
            "cannot assign sample products: no seller rows available"
        );
    }
}
