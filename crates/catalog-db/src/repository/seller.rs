//! # Seller Repository
//!
//! Database operations for sellers. Same contract as the category
//! repository: missing ids are no-ops, and a seller with products cannot be
//! deleted.

use catalog_core::{NewSeller, Seller};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "seller";

/// Repository for seller database operations.
#[derive(Debug, Clone)]
pub struct SellerRepository {
    pool: SqlitePool,
}

impl SellerRepository {
    /// Creates a new SellerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SellerRepository { pool }
    }

    /// Inserts a seller and returns it with its assigned id.
    pub async fn add(&self, seller: &NewSeller) -> DbResult<Seller> {
        debug!(name = %seller.name, "Adding seller");

        let result = sqlx::query("INSERT INTO seller (name, number) VALUES (?1, ?2)")
            .bind(&seller.name)
            .bind(seller.number)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_write(ENTITY))?;

        Ok(Seller {
            seller_id: result.last_insert_rowid(),
            name: seller.name.clone(),
            number: seller.number,
        })
    }

    /// Replaces name and number of a seller.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No seller with this id (no-op)
    pub async fn update(&self, seller_id: i64, seller: &NewSeller) -> DbResult<bool> {
        debug!(seller_id, name = %seller.name, "Updating seller");

        let result = sqlx::query("UPDATE seller SET name = ?1, number = ?2 WHERE seller_id = ?3")
            .bind(&seller.name)
            .bind(seller.number)
            .bind(seller_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_write(ENTITY))?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a seller.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row deleted
    /// * `Ok(false)` - No seller with this id (no-op)
    /// * `Err(DbError::StillReferenced)` - Products still belong to it
    pub async fn delete(&self, seller_id: i64) -> DbResult<bool> {
        debug!(seller_id, "Deleting seller");

        let result = sqlx::query("DELETE FROM seller WHERE seller_id = ?1")
            .bind(seller_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::on_delete(ENTITY, seller_id))?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every seller in storage order.
    pub async fn list_all(&self) -> DbResult<Vec<Seller>> {
        let sellers = sqlx::query_as::<_, Seller>("SELECT seller_id, name, number FROM seller")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = sellers.len(), "Listed sellers");
        Ok(sellers)
    }

    /// Gets a seller by its id.
    pub async fn get(&self, seller_id: i64) -> DbResult<Option<Seller>> {
        let seller = sqlx::query_as::<_, Seller>(
            "SELECT seller_id, name, number FROM seller WHERE seller_id = ?1",
        )
        .bind(seller_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(seller)
    }

    /// Counts sellers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seller")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::NewSeller;

    use crate::{CatalogStore, DbConfig};

    #[tokio::test]
    async fn test_add_update_list() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();
        let repo = store.sellers();

        let ada = repo.add(&NewSeller::new("Ada", 1_000_000_001)).await.unwrap();
        let grace = repo.add(&NewSeller::new("Grace", 1_000_000_002)).await.unwrap();
        assert!(ada.seller_id > 0);
        assert_ne!(ada.seller_id, grace.seller_id);

        let changed = NewSeller::new("Ada L.", 1_000_000_099);
        assert!(repo.update(ada.seller_id, &changed).await.unwrap());

        let all = repo.list_all().await.unwrap();
        let ada_row = all.iter().find(|s| s.seller_id == ada.seller_id).unwrap();
        assert_eq!(ada_row.name, "Ada L.");
        assert_eq!(ada_row.number, 1_000_000_099);
        assert!(all.contains(&grace));
    }

    #[tokio::test]
    async fn test_missing_id_is_noop() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();
        let repo = store.sellers();

        assert!(!repo.update(42, &NewSeller::new("Nobody", 1)).await.unwrap());
        assert!(!repo.delete(42).await.unwrap());
        assert_eq!(repo.get(42).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
