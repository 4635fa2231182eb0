//! Persistence sink.
//!
//! A key-value slot holding whole serialized values under fixed keys. The catalog
//! keeps its entire product collection under one key and overwrites it wholesale.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying IO failed.
    #[error("storage io error")]
    Io(#[from] std::io::Error),

    /// Key contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Byte-valued key-value slot used to persist the catalog.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove `key`. Removing a key that is not present is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys are restricted to ASCII letters, digits, `_` and `-`.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
