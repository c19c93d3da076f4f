//! # Report Rows
//!
//! Row types returned by the three reporting queries, and [`Timed`], which
//! pairs a result set with the wall-clock time spent producing it.
//!
//! ## Timing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller                                                                 │
//! │    │  start = Instant::now()                                            │
//! │    ├──► execute query ──► fetch all rows                                │
//! │    │  elapsed = start.elapsed()                                         │
//! │    ▼                                                                    │
//! │  Timed { rows, elapsed_ms }   ← measured by us, not by SQLite           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A category name and how many products are filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TopCategory {
    pub name: String,
    pub product_count: i64,
}

/// One product listed by a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SellerProduct {
    pub seller_name: String,
    pub product_id: i64,
    pub product_name: String,
}

/// Product count for a (category name, seller name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategorySellerCount {
    pub category_name: String,
    pub seller_name: String,
    pub product_count: i64,
}

/// Rows of a reporting query together with its execution latency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timed<T> {
    /// Result rows, in the order the query defines.
    pub rows: Vec<T>,

    /// Milliseconds spent executing and fetching. Never negative.
    pub elapsed_ms: f64,
}

impl<T> Timed<T> {
    /// Wraps rows with the elapsed time measured around their query.
    pub fn new(rows: Vec<T>, elapsed: Duration) -> Self {
        Timed {
            rows,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
