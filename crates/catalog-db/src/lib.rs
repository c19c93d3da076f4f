//! # catalog-db: Database Layer for the Marketplace Catalog
//!
//! This crate provides database access for the catalog: categories, sellers
//! and products in SQLite, three timed reporting queries, and a sample data
//! generator. It uses sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  catalog CLI / seed binary                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     catalog-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogStore  │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CategoryRepo  │    │              │  │   │
//! │  │   │ 1 connection  │◄───│ SellerRepo    │    │ 001_catalog_ │  │   │
//! │  │   │ open / close  │    │ ProductRepo   │    │   schema.sql │  │   │
//! │  │   │ health_check  │    │ ReportRepo    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Connection lifecycle and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Entity CRUD and reporting queries
//! - [`sample`] - Sample data generator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{CatalogStore, DbConfig};
//!
//! let store = CatalogStore::open(DbConfig::new("path/to/catalog.db")).await?;
//!
//! store.generate_sample_data(Some(42)).await?;
//! let summary = store.reports().category_seller_summary().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod repository;
pub mod sample;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use sample::SampleReport;
pub use store::{CatalogStore, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
pub use repository::seller::SellerRepository;
