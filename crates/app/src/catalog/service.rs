//! Catalog service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use buildforce::{
    products::{Product, ProductDetails, ProductId},
    validation::validate,
};
use jiff::Timestamp;
use mockall::automock;
use tokio::{sync::RwLock, time::timeout};
use tracing::{Span, info, warn};

use crate::{
    catalog::{errors::CatalogServiceError, snapshot},
    ids,
    storage::{KeyValueStore, StorageError},
};

/// Key the product collection is stored under by default.
pub const DEFAULT_STORAGE_KEY: &str = "buildforce_products";

/// Default bound on a single persistence call.
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Catalog persistence settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Key the full collection is written under
    pub storage_key: String,

    /// Bound on each read, write or removal against the store
    pub persist_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }
}

/// Where the collection came from after [`CatalogService::load_from_cache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLoad {
    /// The cached collection was restored.
    Restored {
        /// Number of products restored
        products: usize,
    },

    /// Nothing usable was cached, so the seed catalog is in place.
    Seeded,
}

/// Product store backed by a [`KeyValueStore`].
///
/// Every mutation builds the next full collection, writes it to the store, and swaps
/// it in only once the write succeeds. The write lock is held across the write, so
/// mutations apply one at a time.
pub struct KvCatalogService {
    store: Arc<dyn KeyValueStore>,
    seed: Arc<[Product]>,
    products: RwLock<Vec<Product>>,
    settings: CatalogSettings,
}

impl KvCatalogService {
    /// Create a store holding the seed catalog. Nothing is read from `store` until
    /// [`CatalogService::load_from_cache`] is called.
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        seed: Vec<Product>,
        settings: CatalogSettings,
    ) -> Self {
        Self {
            store,
            products: RwLock::new(seed.clone()),
            seed: seed.into(),
            settings,
        }
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, CatalogServiceError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        let result = timeout(self.settings.persist_timeout, operation)
            .await
            .map_err(|_elapsed| {
                CatalogServiceError::PersistenceTimeout(self.settings.persist_timeout)
            })?;

        Ok(result?)
    }

    async fn persist(&self, products: &[Product]) -> Result<(), CatalogServiceError> {
        let bytes = snapshot::encode(products).map_err(CatalogServiceError::Serialization)?;

        self.bounded(self.store.set(&self.settings.storage_key, bytes))
            .await
            .inspect_err(|error| warn!(error = %error, "failed to persist products"))
    }

    async fn read_cache(&self) -> Result<Option<Vec<Product>>, CatalogServiceError> {
        let Some(bytes) = self.bounded(self.store.get(&self.settings.storage_key)).await? else {
            return Ok(None);
        };

        Ok(Some(snapshot::decode(&bytes)?))
    }
}

impl Debug for KvCatalogService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("KvCatalogService")
            .field("seed", &self.seed.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogService for KvCatalogService {
    async fn list_products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| product.id == *id)
            .cloned()
    }

    #[tracing::instrument(
        name = "catalog.service.create_product",
        skip(self, details),
        fields(product_name = %details.name, product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(
        &self,
        details: ProductDetails,
    ) -> Result<Product, CatalogServiceError> {
        validate(&details)?;

        let mut products = self.products.write().await;

        let id = loop {
            let id = ids::product_id();

            if !products.iter().any(|product| product.id == id) {
                break id;
            }
        };

        Span::current().record("product_id", tracing::field::display(&id));

        let product = Product::new(id, details, Timestamp::now());

        let mut next = products.clone();
        next.push(product.clone());

        self.persist(&next).await?;
        *products = next;

        info!(product_id = %product.id, "created product");

        Ok(product)
    }

    #[tracing::instrument(
        name = "catalog.service.update_product",
        skip(self, details),
        fields(product_id = %id),
        err
    )]
    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, CatalogServiceError> {
        validate(&details)?;

        let mut products = self.products.write().await;

        let current = products
            .iter()
            .find(|product| product.id == *id)
            .ok_or(CatalogServiceError::NotFound)?;

        let updated = Product {
            id: current.id.clone(),
            details,
            created_at: current.created_at,
            updated_at: Timestamp::now(),
        };

        let next: Vec<Product> = products
            .iter()
            .map(|product| {
                if product.id == *id {
                    updated.clone()
                } else {
                    product.clone()
                }
            })
            .collect();

        self.persist(&next).await?;
        *products = next;

        info!(product_id = %updated.id, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "catalog.service.delete_product",
        skip(self),
        fields(product_id = %id),
        err
    )]
    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogServiceError> {
        let mut products = self.products.write().await;

        if !products.iter().any(|product| product.id == *id) {
            return Err(CatalogServiceError::NotFound);
        }

        let next: Vec<Product> = products
            .iter()
            .filter(|product| product.id != *id)
            .cloned()
            .collect();

        self.persist(&next).await?;
        *products = next;

        info!(product_id = %id, "deleted product");

        Ok(())
    }

    #[tracing::instrument(
        name = "catalog.service.load_from_cache",
        skip(self),
        fields(storage_key = %self.settings.storage_key)
    )]
    async fn load_from_cache(&self) -> CacheLoad {
        let mut products = self.products.write().await;

        match self.read_cache().await {
            Ok(Some(cached)) => {
                let count = cached.len();
                *products = cached;

                info!(products = count, "restored products from cache");

                CacheLoad::Restored { products: count }
            }
            Ok(None) => {
                *products = self.seed.to_vec();

                info!(products = products.len(), "no cached products, using seed catalog");

                CacheLoad::Seeded
            }
            Err(error) => {
                *products = self.seed.to_vec();

                warn!(error = %error, "could not restore cached products, using seed catalog");

                CacheLoad::Seeded
            }
        }
    }

    #[tracing::instrument(
        name = "catalog.service.reset_to_seed",
        skip(self),
        fields(storage_key = %self.settings.storage_key),
        err
    )]
    async fn reset_to_seed(&self) -> Result<(), CatalogServiceError> {
        let mut products = self.products.write().await;

        *products = self.seed.to_vec();

        info!(products = products.len(), "reset products to seed catalog");

        self.bounded(self.store.remove(&self.settings.storage_key))
            .await
            .inspect_err(|error| warn!(error = %error, "failed to clear cached products"))
    }
}

/// Product Store: the authoritative product collection and its persistence.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Current collection, in collection order.
    async fn list_products(&self) -> Vec<Product>;

    /// Product with the given identifier, if present.
    async fn get_product(&self, id: &ProductId) -> Option<Product>;

    /// Validates and appends a new product with a fresh identifier, then persists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Invalid`] for invalid details, or a persistence
    /// error if the write fails, in which case the collection is unchanged.
    async fn create_product(
        &self,
        details: ProductDetails,
    ) -> Result<Product, CatalogServiceError>;

    /// Replaces the details of an existing product, refreshing `updated_at`, then
    /// persists. The stored `created_at` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::NotFound`] for an unknown id, and validation or
    /// persistence errors as for [`CatalogService::create_product`].
    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, CatalogServiceError>;

    /// Removes a product, then persists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::NotFound`] for an unknown id, or a persistence
    /// error if the write fails.
    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogServiceError>;

    /// Replaces the collection with the cached one, or the seed catalog when the cache
    /// is absent or unusable.
    async fn load_from_cache(&self) -> CacheLoad;

    /// Replaces the collection with the seed catalog and clears the cache.
    ///
    /// # Errors
    ///
    /// The in-memory reset always happens; an error reports only that the cache could
    /// not be cleared.
    async fn reset_to_seed(&self) -> Result<(), CatalogServiceError>;
}
