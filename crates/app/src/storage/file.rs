//! File-backed key-value store.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use crate::storage::{KeyValueStore, StorageError, check_key};

/// Stores each key as `<key>.json` under a directory.
///
/// Writes land in a uniquely named temporary sibling first and are renamed into place,
/// so a reader never observes a half-written value. A failed write removes its
/// temporary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the data directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).await?;

        Ok(Self { dir })
    }

    /// Data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        check_key(key)?;

        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path(key)?;

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path(key)?;
        let staging = self
            .dir
            .join(format!(".{key}.{}.tmp", Uuid::now_v7().simple()));

        let written = match fs::write(&staging, value).await {
            Ok(()) => fs::rename(&staging, &path).await,
            Err(error) => Err(error),
        };

        if let Err(error) = written {
            if let Err(cleanup) = fs::remove_file(&staging).await
                && cleanup.kind() != ErrorKind::NotFound
            {
                warn!(
                    path = %staging.display(),
                    error = %cleanup,
                    "failed to remove staging file"
                );
            }

            return Err(error.into());
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;

        match fs::remove_file(&path).await {
            Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}
