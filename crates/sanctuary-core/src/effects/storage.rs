//! Device-local storage effect traits.
//!
//! Keys are flat strings such as `sanctuary-theme`; values are raw bytes.
//! Handlers decide the physical layout (files, browser storage, memory).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::FellowshipError;

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum StorageError {
    /// The key is not usable by this handler
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },
    /// Reading a value failed
    #[error("Read failed: {0}")]
    ReadFailed(String),
    /// Writing a value failed
    #[error("Write failed: {0}")]
    WriteFailed(String),
    /// Removing a value failed
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

impl From<StorageError> for FellowshipError {
    fn from(err: StorageError) -> Self {
        FellowshipError::storage(err.to_string())
    }
}

/// Key/value operations every storage handler provides.
#[async_trait]
pub trait StorageCoreEffects: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Retrieve the value stored under `key`.
    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove `key`. Returns whether a value was present.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
