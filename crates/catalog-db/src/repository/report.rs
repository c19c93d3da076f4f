//! # Report Repository
//!
//! The three fixed reporting queries. Each one returns its rows wrapped in
//! [`Timed`], with the latency measured here around execute + fetch.
//!
//! ## Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  top_categories(min)      category ⋈ product                            │
//! │                           GROUP BY category name                        │
//! │                           HAVING count >= min                           │
//! │                           ORDER BY count DESC  (ties: unspecified)      │
//! │                                                                         │
//! │  seller_products(id)      seller ⋈ product                              │
//! │                           WHERE seller_id = id                          │
//! │                           ORDER BY product name ASC                     │
//! │                                                                         │
//! │  category_seller_summary  category ⋈ product ⋈ seller                   │
//! │                           GROUP BY (category name, seller name)         │
//! │                           ORDER BY category name, seller name           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All joins are inner joins: categories and sellers without products never
//! show up, whatever `min_products` is. Name ordering uses SQLite's default
//! BINARY collation.

use std::time::Instant;

use catalog_core::{CategorySellerCount, SellerProduct, Timed, TopCategory};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const TOP_CATEGORIES_SQL: &str = r#"
    SELECT c.name, COUNT(p.product_id) AS product_count
    FROM category c
    JOIN product p ON c.category_id = p.category_id
    GROUP BY c.name
    HAVING COUNT(p.product_id) >= ?1
    ORDER BY product_count DESC
"#;

const SELLER_PRODUCTS_SQL: &str = r#"
    SELECT s.name AS seller_name, p.product_id, p.name AS product_name
    FROM seller s
    JOIN product p ON s.seller_id = p.seller_id
    WHERE s.seller_id = ?1
    ORDER BY p.name
"#;

const CATEGORY_SELLER_SUMMARY_SQL: &str = r#"
    SELECT c.name AS category_name, s.name AS seller_name, COUNT(p.product_id) AS product_count
    FROM category c
    JOIN product p ON c.category_id = p.category_id
    JOIN seller s ON s.seller_id = p.seller_id
    GROUP BY c.name, s.name
    ORDER BY category_name, seller_name
"#;

/// Timed, read-only reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Category names holding at least `min_products` products, busiest first.
    ///
    /// Categories sharing a name are counted together, matching
    /// [`ReportRepository::category_seller_summary`].
    pub async fn top_categories(&self, min_products: i64) -> DbResult<Timed<TopCategory>> {
        let started = Instant::now();

        let rows = sqlx::query_as::<_, TopCategory>(TOP_CATEGORIES_SQL)
            .bind(min_products)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::on_query)?;

        let timed = Timed::new(rows, started.elapsed());
        debug!(
            min_products,
            rows = timed.len(),
            elapsed_ms = timed.elapsed_ms,
            "top_categories"
        );
        Ok(timed)
    }

    /// Products of one seller, by product name.
    ///
    /// An unknown seller or a seller without products yields no rows.
    pub async fn seller_products(&self, seller_id: i64) -> DbResult<Timed<SellerProduct>> {
        let started = Instant::now();

        let rows = sqlx::query_as::<_, SellerProduct>(SELLER_PRODUCTS_SQL)
            .bind(seller_id)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::on_query)?;

        let timed = Timed::new(rows, started.elapsed());
        debug!(
            seller_id,
            rows = timed.len(),
            elapsed_ms = timed.elapsed_ms,
            "seller_products"
        );
        Ok(timed)
    }

    /// Product counts per (category name, seller name) pair.
    pub async fn category_seller_summary(&self) -> DbResult<Timed<CategorySellerCount>> {
        let started = Instant::now();

        let rows = sqlx::query_as::<_, CategorySellerCount>(CATEGORY_SELLER_SUMMARY_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::on_query)?;

        let timed = Timed::new(rows, started.elapsed());
        debug!(
            rows = timed.len(),
            elapsed_ms = timed.elapsed_ms,
            "category_seller_summary"
        );
        Ok(timed)
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::{NewProduct, NewSeller, TopCategory};

    use crate::{CatalogStore, DbConfig};

    async fn empty_store() -> CatalogStore {
        CatalogStore::open(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_reports_are_empty_and_timed() {
        let store = empty_store().await;
        let reports = store.reports();

        let top = reports.top_categories(0).await.unwrap();
        assert!(top.is_empty());
        assert!(top.elapsed_ms >= 0.0);

        let listing = reports.seller_products(1).await.unwrap();
        assert!(listing.is_empty());
        assert!(listing.elapsed_ms >= 0.0);

        let summary = reports.category_seller_summary().await.unwrap();
        assert!(summary.is_empty());
        assert!(summary.elapsed_ms >= 0.0);
    }

    #[tokio::test]
    async fn test_top_categories_threshold_and_order() {
        let store = empty_store().await;
        let seller = store.sellers().add(&NewSeller::new("S1", 1)).await.unwrap();

        // busy: 3 products, mid: 2, quiet: 1, empty: 0
        for (name, n) in [("busy", 3), ("mid", 2), ("quiet", 1), ("empty", 0)] {
            let category = store.categories().add(name).await.unwrap();
            for i in 0..n {
                store
                    .products()
                    .add(&NewProduct::new(
                        format!("{name} {i}"),
                        category.category_id,
                        seller.seller_id,
                    ))
                    .await
                    .unwrap();
            }
        }

        let top = store.reports().top_categories(2).await.unwrap();
        let names: Vec<_> = top.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["busy", "mid"]);
        assert_eq!(top.rows[0].product_count, 3);
        assert_eq!(top.rows[1].product_count, 2);

        let all = store.reports().top_categories(0).await.unwrap();
        assert_eq!(all.len(), 3, "categories without products never appear");
        assert!(all
            .rows
            .windows(2)
            .all(|pair| pair[0].product_count >= pair[1].product_count));
    }

    #[tokio::test]
    async fn test_top_categories_merges_shared_names() {
        let store = empty_store().await;
        let seller = store.sellers().add(&NewSeller::new("S", 1)).await.unwrap();

        for product in ["Sketch", "Study"] {
            let art = store.categories().add("Art").await.unwrap();
            store
                .products()
                .add(&NewProduct::new(product, art.category_id, seller.seller_id))
                .await
                .unwrap();
        }

        let top = store.reports().top_categories(2).await.unwrap();
        assert_eq!(
            top.rows,
            vec![TopCategory {
                name: "Art".to_string(),
                product_count: 2,
            }]
        );

        let summary = store.reports().category_seller_summary().await.unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.rows[0].product_count, top.rows[0].product_count);
    }

    #[tokio::test]
    async fn test_seller_products_sorted_by_name() {
        let store = empty_store().await;
        let category = store.categories().add("C1").await.unwrap();
        let seller = store.sellers().add(&NewSeller::new("S1", 1)).await.unwrap();
        let other = store.sellers().add(&NewSeller::new("S2", 2)).await.unwrap();

        for (name, owner) in [("B", &seller), ("A", &seller), ("Z", &other)] {
            store
                .products()
                .add(&NewProduct::new(name, category.category_id, owner.seller_id))
                .await
                .unwrap();
        }

        let listing = store.reports().seller_products(seller.seller_id).await.unwrap();
        let rows: Vec<_> = listing
            .rows
            .iter()
            .map(|r| (r.seller_name.as_str(), r.product_name.as_str()))
            .collect();
        assert_eq!(rows, vec![("S1", "A"), ("S1", "B")]);

        let unknown = store.reports().seller_products(9_999).await.unwrap();
        assert!(unknown.is_empty());
    }
}
