//! # Category Repository
//!
//! Database operations for categories.
//!
//! ## Key Operations
//! - add / update / delete by id
//! - list every row (storage order)
//!
//! Deleting a category that still has products is rejected by SQLite through
//! the `product.category_id` foreign key; no guard query runs first.

use catalog_core::Category;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "category";

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.categories();
///
/// let art = repo.add("Art").await?;
/// repo.update(art.category_id, "Fine Art").await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Inserts a category and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Category)` - Inserted row
    /// * `Err(DbError::WriteRejected)` - A constraint rejected the row
    pub async fn add(&self, name: &str) -> DbResult<Category> {
        debug!(name = %name, "Adding category");

        let result = sqlx::query("INSERT INTO category (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_write(ENTITY))?;

        Ok(Category {
            category_id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Replaces the name of a category.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No category with this id (no-op)
    pub async fn update(&self, category_id: i64, name: &str) -> DbResult<bool> {
        debug!(category_id, name = %name, "Updating category");

        let result = sqlx::query("UPDATE category SET name = ?1 WHERE category_id = ?2")
            .bind(name)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_write(ENTITY))?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a category.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row deleted
    /// * `Ok(false)` - No category with this id (no-op)
    /// * `Err(DbError::StillReferenced)` - Products still belong to it
    pub async fn delete(&self, category_id: i64) -> DbResult<bool> {
        debug!(category_id, "Deleting category");

        let result = sqlx::query("DELETE FROM category WHERE category_id = ?1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_delete(ENTITY, category_id))?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every category in storage order.
    pub async fn list_all(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT category_id, name FROM category")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Gets a category by its id.
    pub async fn get(&self, category_id: i64) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM category WHERE category_id = ?1",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Counts categories (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::{NewProduct, NewSeller};

    use crate::{CatalogStore, DbConfig, DbError};

    async fn store() -> CatalogStore {
        CatalogStore::open(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_assigns_fresh_ids() {
        let store = store().await;
        let repo = store.categories();

        let first = repo.add("Paintings").await.unwrap();
        let second = repo.add("Paintings").await.unwrap();

        // Names are not unique
        assert_ne!(first.category_id, second.category_id);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }

    #[tokio::test]
    async fn test_update_replaces_only_target_row() {
        let store = store().await;
        let repo = store.categories();

        let prints = repo.add("Prints").await.unwrap();
        let sculpture = repo.add("Sculpture").await.unwrap();

        assert!(repo.update(prints.category_id, "Photography").await.unwrap());

        let updated = repo.get(prints.category_id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Photography");
        assert_eq!(repo.get(sculpture.category_id).await.unwrap(), Some(sculpture));
    }

    #[tokio::test]
    async fn test_missing_id_is_noop() {
        let store = store().await;
        let repo = store.categories();
        let kept = repo.add("Ceramics").await.unwrap();

        assert!(!repo.update(9_999, "Ghost").await.unwrap());
        assert!(!repo.delete(9_999).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = store().await;
        let repo = store.categories();

        let textiles = repo.add("Textiles").await.unwrap();
        let glass = repo.add("Glass").await.unwrap();

        assert!(repo.delete(textiles.category_id).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), vec![glass]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_in_use_is_still_referenced() {
        let store = store().await;
        let repo = store.categories();

        let category = repo.add("Pottery").await.unwrap();
        let seller = store
            .sellers()
            .add(&NewSeller::new("Ada", 1_000_000_001))
            .await
            .unwrap();
        store
            .products()
            .add(&NewProduct::new("Vase", category.category_id, seller.seller_id))
            .await
            .unwrap();

        let err = repo.delete(category.category_id).await.unwrap_err();
        assert!(
            matches!(&err, DbError::StillReferenced { entity, id } if entity == "category" && *id == category.category_id),
            "unexpected error: {err:?}"
        );
        assert_eq!(repo.list_all().await.unwrap(), vec![category]);
    }
}
