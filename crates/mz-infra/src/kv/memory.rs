//! In-memory key-value store
//!
//! Process-local map used by tests and by hosts without durable storage.
//! An optional byte quota makes writes fail with
//! [`StorageError::QuotaExceeded`] once the stored keys and values would
//! exceed it.

use std::collections::HashMap;

use async_trait::async_trait;
use mz_core::ports::{KeyValueStorePort, StorageError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values would exceed
    /// `quota_bytes`, like a full device store.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Pre-populated store, e.g. to simulate data left by an older app version.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            quota_bytes: None,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn used_bytes(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;

        if let Some(quota) = self.quota_bytes {
            let previous = entries.get(key).map_or(0, |v| key.len() + v.len());
            let projected = used_bytes(&entries) - previous + key.len() + value.len();
            if projected > quota {
                tracing::warn!(key, projected, quota, "in-memory store quota exceeded");
                return Err(StorageError::QuotaExceeded);
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let store = InMemoryKeyValueStore::new();

        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemoryKeyValueStore::new();

        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some("1".to_string()));

        store.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);

        // removing again is fine
        store.remove("a").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_with_entries_prepopulates() {
        let store = InMemoryKeyValueStore::with_entries([("k", "v")]);

        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_quota_rejects_oversized_write() {
        let store = InMemoryKeyValueStore::with_quota(8);

        store.set("ab", "cdef").await.unwrap();
        let result = store.set("gh", "ijklmn").await;

        assert_eq!(result, Err(StorageError::QuotaExceeded));
        assert_eq!(store.get("gh").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_counts_overwrite_once() {
        let store = InMemoryKeyValueStore::with_quota(8);

        store.set("ab", "cdef").await.unwrap();
        // replaces the 6 bytes already held by "ab"
        store.set("ab", "cdefgh").await.unwrap();

        assert_eq!(store.get("ab").await.unwrap(), Some("cdefgh".to_string()));
    }
}
