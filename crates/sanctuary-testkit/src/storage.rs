//! In-memory storage handler for tests
//!
//! Clones share the same map, so a test can hand one clone to the code under
//! test and inspect (or reload from) another.

use async_lock::RwLock;
use async_trait::async_trait;
use sanctuary_core::effects::{StorageCoreEffects, StorageError};
use std::collections::HashMap;
use std::sync::Arc;

/// Memory storage handler for testing
#[derive(Debug, Clone, Default)]
pub struct TestStorage {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl TestStorage {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, decoded as UTF-8
    pub async fn get_string(&self, key: &str) -> Option<String> {
        let data = self.data.read().await;
        data.get(key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StorageCoreEffects for TestStorage {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey {
                reason: "Key cannot be empty".to_string(),
            });
        }
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_data() {
        let storage = TestStorage::new();
        let reloaded = storage.clone();

        storage.store("sanctuary-theme", b"dark".to_vec()).await.unwrap();

        assert_eq!(reloaded.get_string("sanctuary-theme").await.as_deref(), Some("dark"));
        assert_eq!(reloaded.len().await, 1);
        assert!(reloaded.remove("sanctuary-theme").await.unwrap());
        assert!(storage.is_empty().await);
    }
}
