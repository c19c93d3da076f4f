//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Referential Integrity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                How Product References Are Enforced                      │
//! │                                                                         │
//! │  add / update product (category_id = 99)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite checks FOREIGN KEY p2c → category(category_id)                 │
//! │       │                                                                 │
//! │       ├── found      → row written, autocommitted                      │
//! │       └── not found  → "FOREIGN KEY constraint failed"                 │
//! │                         → DbError::WriteRejected                       │
//! │                                                                         │
//! │  delete category 3 while a product points at it                       │
//! │       │                                                                 │
//! │       └── FK check fails     → DbError::StillReferenced                │
//! │           (nothing changes in any table)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The name length bound is a `CHECK` constraint, so an over-long name is a
//! write rejection as well.

use catalog_core::{NewProduct, Product};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "product";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let product = repo.add(&NewProduct::new("Sunset", category_id, seller_id)).await?;
/// repo.delete(product.product_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted row
    /// * `Err(DbError::WriteRejected)` - Unknown category/seller or name too long
    pub async fn add(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(
            name = %product.name,
            category_id = product.category_id,
            seller_id = product.seller_id,
            "Adding product"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO product (name, category_id, seller_id)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&product.name)
        .bind(product.category_id)
        .bind(product.seller_id)
        .execute(&self.pool)
        .await
        .map_err(DbError::on_write(ENTITY))?;

        Ok(Product {
            product_id: result.last_insert_rowid(),
            name: product.name.clone(),
            category_id: product.category_id,
            seller_id: product.seller_id,
        })
    }

    /// Replaces name, category and seller of a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No product with this id (no-op)
    /// * `Err(DbError::WriteRejected)` - New references don't resolve
    pub async fn update(&self, product_id: i64, product: &NewProduct) -> DbResult<bool> {
        debug!(product_id, name = %product.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE product SET
                name = ?1,
                category_id = ?2,
                seller_id = ?3
            WHERE product_id = ?4
            "#,
        )
        .bind(&product.name)
        .bind(product.category_id)
        .bind(product.seller_id)
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(DbError::on_write(ENTITY))?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a product.
    ///
    /// Nothing references products, so this only reports whether a row went.
    pub async fn delete(&self, product_id: i64) -> DbResult<bool> {
        debug!(product_id, "Deleting product");

        let result = sqlx::query("DELETE FROM product WHERE product_id = ?1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_delete(ENTITY, product_id))?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every product in storage order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, name, category_id, seller_id FROM product",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    pub async fn get(&self, product_id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, category_id, seller_id
            FROM product
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
