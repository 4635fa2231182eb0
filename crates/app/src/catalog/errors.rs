//! Catalog service errors.

use std::time::Duration;

use buildforce::validation::ValidationError;
use thiserror::Error;

use crate::{catalog::snapshot::SnapshotError, storage::StorageError};

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// No product has the given id.
    #[error("product not found")]
    NotFound,

    /// Details failed validation.
    #[error("invalid product: {0}")]
    Invalid(#[from] ValidationError),

    /// The store rejected the write.
    #[error("failed to persist products")]
    Persistence(#[from] StorageError),

    /// The store did not answer in time.
    #[error("persisting products timed out after {0:?}")]
    PersistenceTimeout(Duration),

    /// Encoding the collection failed.
    #[error("failed to serialize products")]
    Serialization(#[source] serde_json::Error),

    /// Cached collection could not be decoded.
    #[error("cached products are unreadable")]
    Snapshot(#[from] SnapshotError),
}
