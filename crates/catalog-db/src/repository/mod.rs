//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command / seed binary / test                                      │
//! │       │                                                                 │
//! │       │  store.products().add(&new_product)                            │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── add(&self, fields)          → Product (with assigned id)          │
//! │  ├── update(&self, id, fields)   → bool (false = no such id)           │
//! │  ├── delete(&self, id)           → bool (false = no such id)           │
//! │  └── list_all(&self)             → Vec<Product>                        │
//! │       │                                                                 │
//! │       │  one SQL statement, autocommitted                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`](category::CategoryRepository) - Category CRUD
//! - [`SellerRepository`](seller::SellerRepository) - Seller CRUD
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD
//! - [`ReportRepository`](report::ReportRepository) - Timed reporting queries

pub mod category;
pub mod product;
pub mod report;
pub mod seller;
