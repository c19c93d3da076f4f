//! # Catalog Store
//!
//! Connection lifecycle and schema provisioning for the catalog database.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Store Lifecycle                            │
//! │                                                                         │
//! │  DbConfig::new(path) ← Injected by the caller (CLI, seed, tests)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogStore::open(config).await                                      │
//! │       │   ├── connect (one connection)     ✗ → ConnectionFailed         │
//! │       │   └── provision_schema()           ✗ → SchemaFailed             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │      SqlitePool (max_connections = 1)   │                           │
//! │  │              ┌─────┐                    │                           │
//! │  │              │Conn │                    │                           │
//! │  │              └─────┘                    │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ├── categories() / sellers() / products()   CRUD                 │
//! │       ├── reports()                               timed queries        │
//! │       ├── generate_sample_data(seed)                                   │
//! │       ├── health_check()                                               │
//! │       ▼                                                                 │
//! │  close().await   ← every later call fails with ConnectionFailed        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Connection Policy
//! The store holds exactly one connection for its whole life. There is no
//! reconnect and no retry: a failed call is terminal for that call, and a
//! closed store stays closed. Callers sharing one store across tasks get
//! statement-level interleaving from SQLite and nothing more.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::category::CategoryRepository;
use crate::repository::product::ProductRepository;
use crate::repository::report::ReportRepository;
use crate::repository::seller::SellerRepository;
use crate::sample::{self, SampleReport};

/// Path that selects a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/catalog.db")
///     .connect_timeout(Duration::from_secs(5))
///     .run_migrations(true);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to provision the schema on open.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the database file at `path`.
    ///
    /// The file is created if it doesn't exist; its directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to provision the schema on open.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let store = CatalogStore::open(DbConfig::in_memory()).await?;
    /// // Store is isolated and vanishes when closed
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Returns true if this configuration selects an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
        };

        Ok(options
            // WAL mode: readers don't block the writer
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // SQLite has foreign keys disabled by default; the schema relies on them
            .foreign_keys(true))
    }
}

// =============================================================================
// CatalogStore
// =============================================================================

/// Handle to the catalog database.
///
/// Cloning is cheap and shares the single underlying connection.
///
/// ## Usage
/// ```rust,ignore
/// let store = CatalogStore::open(DbConfig::new("./catalog.db")).await?;
///
/// let art = store.categories().add("Art").await?;
/// let seller = store.sellers().add(&NewSeller::new("Ada", 1_000_000_001)).await?;
/// store
///     .products()
///     .add(&NewProduct::new("Sunset", art.category_id, seller.seller_id))
///     .await?;
///
/// let top = store.reports().top_categories(1).await?;
/// println!("{} rows in {:.3} ms", top.len(), top.elapsed_ms);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Pool capped at a single connection.
    pool: SqlitePool,
}

impl CatalogStore {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Opens one connection (creating the database file if needed)
    /// 2. Enables foreign key enforcement on that connection
    /// 3. Provisions the schema (if enabled)
    ///
    /// ## Returns
    /// * `Ok(CatalogStore)` - Ready-to-use store
    /// * `Err(DbError::ConnectionFailed)` - The database could not be opened
    /// * `Err(DbError::SchemaFailed)` - Tables could not be created
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening catalog store"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        // One connection, kept for the life of the store. No idle or lifetime
        // expiry: an in-memory database lives only as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Catalog store connected");

        let store = CatalogStore { pool };

        if config.run_migrations {
            store.provision_schema().await?;
        }

        Ok(store)
    }

    /// Ensures the category, seller and product tables exist.
    ///
    /// Idempotent: already-applied migrations are skipped, and every
    /// statement uses `IF NOT EXISTS`.
    pub async fn provision_schema(&self) -> DbResult<()> {
        info!("Provisioning catalog schema");
        migrations::run_migrations(&self.pool).await?;
        Ok(())
    }

    /// Returns `(total_migrations, applied_migrations)`.
    pub async fn schema_status(&self) -> DbResult<(usize, usize)> {
        migrations::migration_status(&self.pool).await
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Returns the seller repository.
    pub fn sellers(&self) -> SellerRepository {
        SellerRepository::new(self.pool.clone())
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the timed reporting queries.
    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.pool.clone())
    }

    /// Seeds the sample catalog.
    ///
    /// See [`crate::sample`] for the conflict key and seed semantics.
    pub async fn generate_sample_data(&self, seed: Option<u64>) -> DbResult<SampleReport> {
        sample::generate_sample_data(&self.pool, seed).await
    }

    /// Closes the connection.
    ///
    /// ## Note
    /// After calling close, every operation fails with
    /// [`DbError::ConnectionFailed`]. An in-memory database is discarded.
    pub async fn close(&self) {
        info!("Closing catalog store");
        self.pool.close().await;
    }

    /// Returns true once [`CatalogStore::close`] has run.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Checks if the database is responsive.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();

        assert!(store.health_check().await);
        assert!(!store.is_closed());
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/catalog.db")
            .connect_timeout(Duration::from_secs(2))
            .run_migrations(false);

        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.run_migrations);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_provision_schema_is_idempotent() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();

        store.provision_schema().await.unwrap();
        store.provision_schema().await.unwrap();

        let (total, applied) = store.schema_status().await.unwrap();
        assert_eq!(total, applied);
        assert!(total >= 1);
    }

    #[tokio::test]
    async fn test_open_fails_for_unreachable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.db");

        let err = CatalogStore::open(DbConfig::new(path)).await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_closed_store_reports_connection_failure() {
        let store = CatalogStore::open(DbConfig::in_memory()).await.unwrap();
        store.close().await;

        assert!(store.is_closed());
        assert!(!store.health_check().await);

        let err = store.categories().list_all().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
