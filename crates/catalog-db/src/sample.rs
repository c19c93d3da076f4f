//! # Sample Data Generator
//!
//! Inserts the sample catalog planned by [`catalog_core::sample`].
//!
//! ## Conflict Key
//! A sample row is skipped when its table already holds a row with the same
//! `name`. The schema has no UNIQUE constraint on names (ordinary `add`
//! calls may create duplicates), so the check is part of each INSERT:
//!
//! ```sql
//! INSERT INTO category (name)
//! SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM category WHERE name = ?1)
//! ```
//!
//! Running the generator twice therefore leaves 10 "Category n", 10
//! "Seller n" and 20 "Product n" rows, not twice as many.
//!
//! ## Assignment
//! Each sample product gets a uniformly random category and seller drawn from
//! every id present once the sample categories and sellers are in place,
//! including rows that existed before. Ids are read in ascending order, so a
//! fixed seed over the same table contents reproduces the same assignment.
//!
//! Everything runs in one transaction; a failure leaves no partial sample.

use catalog_core::sample;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

const INSERT_CATEGORY_SQL: &str = r#"
    INSERT INTO category (name)
    SELECT ?1
    WHERE NOT EXISTS (SELECT 1 FROM category WHERE name = ?1)
"#;

const INSERT_SELLER_SQL: &str = r#"
    INSERT INTO seller (name, number)
    SELECT ?1, ?2
    WHERE NOT EXISTS (SELECT 1 FROM seller WHERE name = ?1)
"#;

const INSERT_PRODUCT_SQL: &str = r#"
    INSERT INTO product (name, category_id, seller_id)
    SELECT ?1, ?2, ?3
    WHERE NOT EXISTS (SELECT 1 FROM product WHERE name = ?1)
"#;

/// Rows actually inserted by one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    pub categories: u64,
    pub sellers: u64,
    pub products: u64,
}

impl SampleReport {
    pub fn total(&self) -> u64 {
        self.categories + self.sellers + self.products
    }
}

/// Seeds sample categories, sellers and products.
///
/// ## Arguments
/// * `seed` - `Some` for reproducible product assignment, `None` for entropy
pub async fn generate_sample_data(pool: &SqlitePool, seed: Option<u64>) -> DbResult<SampleReport> {
    info!(?seed, "Generating sample data");

    let mut report = SampleReport::default();
    let mut tx = pool.begin().await?;

    for name in sample::category_names() {
        let result = sqlx::query(INSERT_CATEGORY_SQL)
            .bind(&name)
            .execute(&mut *tx)
            .await
            .map_err(DbError::on_write("category"))?;
        report.categories += result.rows_affected();
    }

    for seller in sample::sellers() {
        let result = sqlx::query(INSERT_SELLER_SQL)
            .bind(&seller.name)
            .bind(seller.number)
            .execute(&mut *tx)
            .await
            .map_err(DbError::on_write("seller"))?;
        report.sellers += result.rows_affected();
    }

    let category_ids: Vec<i64> =
        sqlx::query_scalar("SELECT category_id FROM category ORDER BY category_id")
            .fetch_all(&mut *tx)
            .await?;
    let seller_ids: Vec<i64> = sqlx::query_scalar("SELECT seller_id FROM seller ORDER BY seller_id")
        .fetch_all(&mut *tx)
        .await?;

    debug!(
        categories = category_ids.len(),
        sellers = seller_ids.len(),
        "Assigning sample products"
    );

    let mut rng = sample::sample_rng(seed);
    let planned =
        sample::assign_products(sample::product_names(), &category_ids, &seller_ids, &mut rng)?;

    for product in &planned {
        let result = sqlx::query(INSERT_PRODUCT_SQL)
            .bind(&product.name)
            .bind(product.category_id)
            .bind(product.seller_id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::on_write("product"))?;
        report.products += result.rows_affected();
    }

    tx.commit().await?;

    info!(
        categories = report.categories,
        sellers = report.sellers,
        products = report.products,
        "Sample data generated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use catalog_core::sample::{SAMPLE_CATEGORY_COUNT, SAMPLE_PRODUCT_COUNT, SAMPLE_SELLER_COUNT};
    use catalog_core::NewSeller;

    use super::*;
    use crate::{CatalogStore, DbConfig};

    #[tokio::test]
    async fn test_generates_full_sample() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();

        let report = store.generate_sample_data(Some(1)).await.unwrap();
        assert_eq!(
            report,
            SampleReport {
                categories: SAMPLE_CATEGORY_COUNT as u64,
                sellers: SAMPLE_SELLER_COUNT as u64,
                products: SAMPLE_PRODUCT_COUNT as u64,
            }
        );

        let sellers = store.sellers().list_all().await.unwrap();
        let seller_1 = sellers.iter().find(|s| s.name == "Seller 1").unwrap();
        assert_eq!(seller_1.number, 1_000_000_001);
        let seller_10 = sellers.iter().find(|s| s.name == "Seller 10").unwrap();
        assert_eq!(seller_10.number, 1_000_000_010);

        let category_ids: Vec<i64> = store
            .categories()
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.category_id)
            .collect();
        for product in store.products().list_all().await.unwrap() {
            assert!(category_ids.contains(&product.category_id));
            assert!(sellers.iter().any(|s| s.seller_id == product.seller_id));
        }
    }

    #[tokio::test]
    async fn test_second_run_inserts_nothing() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();

        store.generate_sample_data(None).await.unwrap();
        let again = store.generate_sample_data(None).await.unwrap();

        assert_eq!(again.total(), 0);
        assert_eq!(store.categories().count().await.unwrap(), 10);
        assert_eq!(store.sellers().count().await.unwrap(), 10);
        assert_eq!(store.products().count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_existing_names_are_skipped() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();
        store.categories().add("Category 3").await.unwrap();
        store
            .sellers()
            .add(&NewSeller::new("Seller 7", 555))
            .await
            .unwrap();

        let report = store.generate_sample_data(Some(9)).await.unwrap();
        assert_eq!(report.categories, 9);
        assert_eq!(report.sellers, 9);

        // The pre-existing row keeps its own number
        let sellers = store.sellers().list_all().await.unwrap();
        let seller_7: Vec<_> = sellers.iter().filter(|s| s.name == "Seller 7").collect();
        assert_eq!(seller_7.len(), 1);
        assert_eq!(seller_7[0].number, 555);
    }

    #[tokio::test]
    async fn test_same_seed_same_assignment() {
        let first = CatalogStore::open(DbConfig::in_memory()).await.unwrap();
        let second = CatalogStore::open(DbConfig::in_memory()).await.unwrap();

        first.generate_sample_data(Some(2024)).await.unwrap();
        second.generate_sample_data(Some(2024)).await.unwrap();

        assert_eq!(
            first.products().list_all().await.unwrap(),
            second.products().list_all().await.unwrap()
        );
    }
}
