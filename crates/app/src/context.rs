//! App Context

use std::sync::Arc;

use buildforce::{
    categories::Category,
    fixtures::{Fixture, FixtureError},
};
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CacheLoad, CatalogService, CatalogServiceError, KvCatalogService},
    config::AppConfig,
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
};

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// Seed catalog could not be loaded.
    #[error("failed to load seed catalog")]
    Seed(#[from] FixtureError),

    /// Data directory could not be opened.
    #[error("failed to open data directory")]
    Storage(#[from] StorageError),

    /// Resetting to the seed failed.
    #[error("failed to refresh catalog from seed")]
    Refresh(#[source] CatalogServiceError),
}

/// Shared handles for commands.
#[derive(Clone)]
pub struct AppContext {
    /// Product store
    pub catalog: Arc<dyn CatalogService>,

    /// Category schema
    pub categories: Arc<[Category]>,
}

impl AppContext {
    /// Build the context from configuration and hydrate the catalog.
    ///
    /// The catalog is restored from the store when a usable snapshot exists and seeded
    /// otherwise; with `refresh_on_start` it is then reset to the seed.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed catalog cannot be loaded, the data directory
    /// cannot be opened, or a requested refresh cannot clear the cache.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let fixture = match &config.seed_file {
            Some(path) => Fixture::from_path(path)?,
            None => Fixture::embedded()?,
        };

        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir).await?),
            None => Arc::new(MemoryStore::new()),
        };

        let categories: Arc<[Category]> = fixture.categories().into();

        let catalog = KvCatalogService::new(
            store,
            fixture.into_products(),
            config.catalog_settings(),
        );

        let load = catalog.load_from_cache().await;

        if config.refresh_on_start {
            catalog
                .reset_to_seed()
                .await
                .map_err(AppInitError::Refresh)?;
        }

        info!(
            restored = matches!(load, CacheLoad::Restored { .. }),
            refreshed = config.refresh_on_start,
            "catalog ready"
        );

        Ok(Self::new(Arc::new(catalog), categories))
    }

    /// Assemble a context from an existing catalog service.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, categories: Arc<[Category]>) -> Self {
        Self {
            catalog,
            categories,
        }
    }
}
