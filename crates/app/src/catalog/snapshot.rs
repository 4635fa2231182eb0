//! Serialized form of the product collection.
//!
//! The whole collection is written as one JSON array of camelCase product records.

use buildforce::{
    products::Product,
    validation::{ValidationError, validate},
};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Reasons a stored snapshot is rejected.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not a JSON array of products.
    #[error("malformed product snapshot")]
    Json(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("duplicate product id in snapshot: {0}")]
    DuplicateId(String),

    /// A record fails validation.
    #[error("invalid product {id} in snapshot")]
    Invalid {
        /// Offending product id
        id: String,

        /// Validation failure
        #[source]
        source: ValidationError,
    },
}

pub(crate) fn encode(products: &[Product]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(products)
}

/// Decode a snapshot, rejecting records the store would never have written.
pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<Product>, SnapshotError> {
    let products: Vec<Product> = serde_json::from_slice(bytes)?;

    let mut seen = FxHashSet::default();

    for product in &products {
        if !seen.insert(product.id.as_str()) {
            return Err(SnapshotError::DuplicateId(product.id.to_string()));
        }

        validate(&product.details).map_err(|source| SnapshotError::Invalid {
            id: product.id.to_string(),
            source,
        })?;
    }

    Ok(products)
}
