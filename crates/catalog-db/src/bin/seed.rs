//! # Seed Data Generator
//!
//! Populates a catalog database with the sample catalog.
//!
//! ## Usage
//! ```bash
//! # Seed ./catalog_dev.db with random product assignment
//! cargo run -p catalog-db --bin seed
//!
//! # Reproducible assignment
//! cargo run -p catalog-db --bin seed -- --seed 42
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Rows
//! - 10 categories: "Category 1" .. "Category 10"
//! - 10 sellers: "Seller 1" .. "Seller 10", numbers 1000000001 .. 1000000010
//! - 20 products: "Product 1" .. "Product 20", random category and seller
//!
//! Rows whose name already exists are skipped, so re-running is harmless.

use catalog_db::{CatalogStore, DbConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Seed the catalog database with sample data")]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./catalog_dev.db")]
    db: String,

    /// Seed for reproducible product assignment
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let args = Args::parse();

    info!(db = %args.db, seed = ?args.seed, "Seeding catalog");

    let store = CatalogStore::open(DbConfig::new(&args.db)).await?;

    let start = std::time::Instant::now();
    let report = store.generate_sample_data(args.seed).await?;
    let elapsed = start.elapsed();

    println!("Database:   {}", args.db);
    println!("Categories: +{}", report.categories);
    println!("Sellers:    +{}", report.sellers);
    println!("Products:   +{}", report.products);
    if report.total() == 0 {
        println!("Sample data already present, nothing inserted.");
    }
    println!("Done in {:?}", elapsed);

    let summary = store.reports().category_seller_summary().await?;
    println!(
        "Summary query: {} rows in {:.3} ms",
        summary.len(),
        summary.elapsed_ms
    );

    store.close().await;
    Ok(())
}
