//! Layer 3: Storage Effect Handler - Production Only
//!
//! Device-local persistence for preferences. Each key is one file
//! `<base>/<key>.dat`; keys are flat, so anything that could escape the base
//! directory is rejected.

use async_trait::async_trait;
use sanctuary_core::effects::{StorageCoreEffects, StorageError};
use std::path::{Path, PathBuf};
use tokio::fs;

const FILE_EXTENSION: &str = "dat";

/// Filesystem-based storage handler for production use
#[derive(Debug, Clone)]
pub struct FilesystemStorageHandler {
    /// Base directory for storage files
    base_path: PathBuf,
}

impl FilesystemStorageHandler {
    /// Create a new filesystem storage handler rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "Key cannot be empty".to_string(),
        });
    }
    if key.contains(&['/', '\\'][..]) || key.starts_with('.') {
        return Err(StorageError::InvalidKey {
            reason: format!("Key must be a plain name: {key}"),
        });
    }
    Ok(())
}

#[async_trait]
impl StorageCoreEffects for FilesystemStorageHandler {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let file_path = self.file_path(key)?;
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("Failed to create directory: {e}")))?;

        fs::write(&file_path, value)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("Failed to write file: {e}")))?;

        tracing::debug!(key, path = %file_path.display(), "stored preference");
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let file_path = self.file_path(key)?;
        match fs::read(&file_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("Failed to read file: {e}"))),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let file_path = self.file_path(key)?;
        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to remove file: {e}"
            ))),
        }
    }
}
