//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use catalog_db::DbConfig;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "./catalog.db";

/// Catalog CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite database file (`:memory:` for a throwaway store)
    pub database_path: PathBuf,

    /// Seconds to wait for the connection
    pub connect_timeout_secs: u64,

    /// Provision the schema on open
    pub run_migrations: bool,
}

impl CatalogConfig {
    /// Load configuration from the process environment.
    ///
    /// | Variable                        | Default        |
    /// |---------------------------------|----------------|
    /// | `CATALOG_DATABASE_PATH`         | `./catalog.db` |
    /// | `CATALOG_CONNECT_TIMEOUT_SECS`  | `30`           |
    /// | `CATALOG_RUN_MIGRATIONS`        | `true`         |
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CatalogConfig {
            database_path: lookup("CATALOG_DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),

            connect_timeout_secs: lookup("CATALOG_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_CONNECT_TIMEOUT_SECS".to_string()))?,

            run_migrations: lookup("CATALOG_RUN_MIGRATIONS")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_RUN_MIGRATIONS".to_string()))?,
        };

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("CATALOG_DATABASE_PATH".to_string()));
        }

        Ok(config)
    }

    /// Builds the store configuration.
    pub fn db_config(&self) -> DbConfig {
        let base = if self.database_path.as_os_str() == ":memory:" {
            DbConfig::in_memory()
        } else {
            DbConfig::new(&self.database_path)
        };

        base.connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_from(vars: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.connect_timeout_secs, 30);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("CATALOG_DATABASE_PATH", ":memory:"),
            ("CATALOG_CONNECT_TIMEOUT_SECS", "3"),
            ("CATALOG_RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        let db = config.db_config();
        assert!(db.is_in_memory());
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
        assert!(!db.run_migrations);
    }

    #[test]
    fn test_invalid_values() {
        let err = load_from(&[("CATALOG_CONNECT_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "CATALOG_CONNECT_TIMEOUT_SECS"));

        let err = load_from(&[("CATALOG_DATABASE_PATH", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }
}
