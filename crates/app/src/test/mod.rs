//! Test context for catalog service tests.

use std::{future, sync::Arc, time::Duration};

use async_trait::async_trait;
use buildforce::{
    fixtures::{FixtureError, seed_products},
    products::{Product, ProductDetails},
};

use crate::{
    catalog::{CatalogSettings, KvCatalogService},
    storage::{KeyValueStore, MemoryStore, StorageError},
};

pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub catalog: KvCatalogService,
    pub seed: Vec<Product>,
}

impl TestContext {
    /// Catalog holding the seed products over an empty in-memory store.
    pub fn new() -> Result<Self, FixtureError> {
        let store = Arc::new(MemoryStore::new());
        let seed = seed_products()?;

        Ok(Self {
            catalog: KvCatalogService::new(
                store.clone(),
                seed.clone(),
                CatalogSettings::default(),
            ),
            store,
            seed,
        })
    }

    /// A second catalog sharing this context's store, as after a restart.
    pub fn restart(&self) -> KvCatalogService {
        KvCatalogService::new(
            self.store.clone(),
            self.seed.clone(),
            CatalogSettings::default(),
        )
    }
}

/// Catalog over an arbitrary store with a short persistence timeout.
pub(crate) fn catalog_with_store(
    store: impl KeyValueStore + 'static,
) -> Result<KvCatalogService, FixtureError> {
    Ok(KvCatalogService::new(
        Arc::new(store),
        seed_products()?,
        CatalogSettings {
            persist_timeout: Duration::from_millis(20),
            ..CatalogSettings::default()
        },
    ))
}

/// Valid product details.
pub(crate) fn details(name: &str) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        category: "Power Tools".to_string(),
        subcategory: "Sanders".to_string(),
        description: format!("{name} for finishing work"),
        price: 3_200,
        images: vec!["/assets/products/sander.png".to_string()],
        stock: 4,
        in_stock: true,
        brand: Some("Maxmech".to_string()),
        ..ProductDetails::default()
    }
}

/// Store whose calls never complete.
#[derive(Debug)]
pub(crate) struct StalledStore;

#[async_trait]
impl KeyValueStore for StalledStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        future::pending().await
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        future::pending().await
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        future::pending().await
    }
}
