//! Subcommands and their execution against an open store.

use catalog_core::{NewProduct, NewSeller};
use catalog_db::CatalogStore;
use clap::Subcommand;
use tracing::info;

use crate::output::{print_rows, print_timed, print_value};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage sellers
    #[command(subcommand)]
    Seller(SellerCommand),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Insert the sample catalog (existing names are skipped)
    Seed {
        /// Seed for reproducible product assignment
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a timed report
    #[command(subcommand)]
    Report(ReportCommand),

    /// Show connection and schema state
    Status,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Add a category
    Add { name: String },
    /// Rename a category
    Update { id: i64, name: String },
    /// Delete a category with no products
    Delete { id: i64 },
    /// List all categories
    List,
}

#[derive(Debug, Subcommand)]
pub enum SellerCommand {
    /// Add a seller
    Add { name: String, number: i64 },
    /// Replace a seller's name and number
    Update { id: i64, name: String, number: i64 },
    /// Delete a seller with no products
    Delete { id: i64 },
    /// List all sellers
    List,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Add a product
    Add {
        name: String,
        category_id: i64,
        seller_id: i64,
    },
    /// Replace all fields of a product
    Update {
        id: i64,
        name: String,
        category_id: i64,
        seller_id: i64,
    },
    /// Delete a product
    Delete { id: i64 },
    /// List all products
    List,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Categories with at least `--min` products, largest first
    TopCategories {
        #[arg(long, default_value_t = 1)]
        min: i64,
    },
    /// Products of one seller, by product name
    SellerProducts { seller_id: i64 },
    /// Product counts per (category, seller) pair
    Summary,
}

/// Runs `command` and prints its result.
pub async fn execute(store: &CatalogStore, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Category(cmd) => category(store, cmd, json).await,
        Command::Seller(cmd) => seller(store, cmd, json).await,
        Command::Product(cmd) => product(store, cmd, json).await,
        Command::Seed { seed } => {
            let report = store.generate_sample_data(seed).await?;
            info!(inserted = report.total(), "Sample data generated");
            print_value(&report, json)
        }
        Command::Report(cmd) => report(store, cmd, json).await,
        Command::Status => status(store).await,
    }
}

async fn category(store: &CatalogStore, cmd: CategoryCommand, json: bool) -> anyhow::Result<()> {
    let repo = store.categories();
    match cmd {
        CategoryCommand::Add { name } => print_value(&repo.add(&name).await?, json),
        CategoryCommand::Update { id, name } => {
            applied("category", "Updated", id, repo.update(id, &name).await?);
            Ok(())
        }
        CategoryCommand::Delete { id } => {
            applied("category", "Deleted", id, repo.delete(id).await?);
            Ok(())
        }
        CategoryCommand::List => print_rows(&repo.list_all().await?, json),
    }
}

async fn seller(store: &CatalogStore, cmd: SellerCommand, json: bool) -> anyhow::Result<()> {
    let repo = store.sellers();
    match cmd {
        SellerCommand::Add { name, number } => {
            print_value(&repo.add(&NewSeller::new(name, number)).await?, json)
        }
        SellerCommand::Update { id, name, number } => {
            let changed = repo.update(id, &NewSeller::new(name, number)).await?;
            applied("seller", "Updated", id, changed);
            Ok(())
        }
        SellerCommand::Delete { id } => {
            applied("seller", "Deleted", id, repo.delete(id).await?);
            Ok(())
        }
        SellerCommand::List => print_rows(&repo.list_all().await?, json),
    }
}

async fn product(store: &CatalogStore, cmd: ProductCommand, json: bool) -> anyhow::Result<()> {
    let repo = store.products();
    match cmd {
        ProductCommand::Add {
            name,
            category_id,
            seller_id,
        } => {
            let product = NewProduct::new(name, category_id, seller_id);
            print_value(&repo.add(&product).await?, json)
        }
        ProductCommand::Update {
            id,
            name,
            category_id,
            seller_id,
        } => {
            let changed = repo
                .update(id, &NewProduct::new(name, category_id, seller_id))
                .await?;
            applied("product", "Updated", id, changed);
            Ok(())
        }
        ProductCommand::Delete { id } => {
            applied("product", "Deleted", id, repo.delete(id).await?);
            Ok(())
        }
        ProductCommand::List => print_rows(&repo.list_all().await?, json),
    }
}

async fn report(store: &CatalogStore, cmd: ReportCommand, json: bool) -> anyhow::Result<()> {
    let reports = store.reports();
    match cmd {
        ReportCommand::TopCategories { min } => print_timed(&reports.top_categories(min).await?, json),
        ReportCommand::SellerProducts { seller_id } => {
            print_timed(&reports.seller_products(seller_id).await?, json)
        }
        ReportCommand::Summary => print_timed(&reports.category_seller_summary().await?, json),
    }
}

async fn status(store: &CatalogStore) -> anyhow::Result<()> {
    let healthy = store.health_check().await;
    let (total, applied) = store.schema_status().await?;

    println!("Connection: {}", if healthy { "ok" } else { "unavailable" });
    println!("Migrations: {applied}/{total} applied");
    Ok(())
}

fn applied(entity: &str, verb: &str, id: i64, changed: bool) {
    if changed {
        println!("{verb} {entity} {id}");
    } else {
        println!("No {entity} with id {id}");
    }
}
