//! Application configuration

use std::{path::PathBuf, time::Duration};

use clap::Args;

use crate::catalog::{CatalogSettings, DEFAULT_STORAGE_KEY};

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Directory the catalog is persisted in; kept in memory when unset
    #[arg(long, env = "BUILDFORCE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// YAML file replacing the compiled-in seed catalog
    #[arg(long, env = "BUILDFORCE_SEED_FILE", global = true)]
    pub seed_file: Option<PathBuf>,

    /// Key the product collection is stored under
    #[arg(
        long,
        env = "BUILDFORCE_STORAGE_KEY",
        default_value = DEFAULT_STORAGE_KEY,
        global = true
    )]
    pub storage_key: String,

    /// Bound on each persistence call, in milliseconds
    #[arg(
        long,
        env = "BUILDFORCE_PERSIST_TIMEOUT_MS",
        default_value_t = 5_000,
        global = true
    )]
    pub persist_timeout_ms: u64,

    /// Discard the cached catalog and start from the seed
    #[arg(long, env = "BUILDFORCE_REFRESH_ON_START", global = true)]
    pub refresh_on_start: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

impl AppConfig {
    /// Persistence settings for the catalog service.
    #[must_use]
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            storage_key: self.storage_key.clone(),
            persist_timeout: Duration::from_millis(self.persist_timeout_ms),
        }
    }
}
