//! # catalog-core: Pure Domain Layer for the Marketplace Catalog
//!
//! This crate holds the catalog's types and pure logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Marketplace Catalog Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog CLI (apps/catalog-cli)               │   │
//! │  │    category/seller/product CRUD ──► seed ──► report            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  report   │  │  sample   │  │   error   │  │   │
//! │  │   │ Category  │  │TopCategory│  │ names     │  │ CoreError │  │   │
//! │  │   │ Seller    │  │ Timed<T>  │  │ numbers   │  │           │  │   │
//! │  │   │ Product   │  │           │  │ assignment│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   catalog-db (Database Layer)                   │   │
//! │  │          SQLite schema, repositories, timed reports             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity rows (Category, Seller, Product) and their inputs
//! - [`report`] - Reporting query rows and the [`Timed`] latency wrapper
//! - [`sample`] - Sample catalog planning (names, numbers, random assignment)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::sample;
//!
//! let names: Vec<String> = sample::category_names().collect();
//! assert_eq!(names.first().map(String::as_str), Some("Category 1"));
//! assert_eq!(names.len(), sample::SAMPLE_CATEGORY_COUNT);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod report;
pub mod sample;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use report::{CategorySellerCount, SellerProduct, Timed, TopCategory};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
///
/// Mirrors the `CHECK (length(name) <= 20)` constraint on the product table.
/// The application does not pre-validate; the storage engine rejects longer
/// names and the db layer reports a write error.
pub const PRODUCT_NAME_MAX_LEN: usize = 20;
