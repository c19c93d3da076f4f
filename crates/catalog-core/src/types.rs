//! # Domain Types
//!
//! Entity rows stored by the catalog, plus the input shapes used to create
//! and replace them.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Entities                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    Product      │   │     Seller      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category_id ◄──┼───┼─ category_id    │   │  seller_id      │       │
//! │  │  name           │   │  seller_id ─────┼───┼─►               │       │
//! │  └─────────────────┘   │  product_id     │   │  name           │       │
//! │                        │  name (≤ 20)    │   │  number         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every `*_id` is an integer assigned by the store on insert. It never
//! changes afterwards; updates replace only the remaining fields.

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// A product category.
///
/// Names are not unique: two categories may share a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Store-assigned identifier.
    pub category_id: i64,

    /// Display name.
    pub name: String,
}

// =============================================================================
// Seller
// =============================================================================

/// A seller listing products in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Seller {
    /// Store-assigned identifier.
    pub seller_id: i64,

    /// Display name.
    pub name: String,

    /// Numeric contact number.
    pub number: i64,
}

/// Fields of a seller, used for both insert and full-row update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSeller {
    pub name: String,
    pub number: i64,
}

impl NewSeller {
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        NewSeller {
            name: name.into(),
            number,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product belonging to exactly one category and one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub product_id: i64,

    /// Display name, at most [`crate::PRODUCT_NAME_MAX_LEN`] characters.
    pub name: String,

    /// Owning category (foreign key).
    pub category_id: i64,

    /// Owning seller (foreign key).
    pub seller_id: i64,
}

/// Fields of a product, used for both insert and full-row update.
///
/// The foreign keys are not checked here; the storage engine resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category_id: i64,
    pub seller_id: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category_id: i64, seller_id: i64) -> Self {
        NewProduct {
            name: name.into(),
            category_id,
            seller_id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
