//! Shared test doubles for store and use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use mz_core::ports::{KeyValueStorePort, StorageError};
use mz_infra::time::FixedClock;
use mz_infra::InMemoryKeyValueStore;

mock! {
    pub Storage {}

    #[async_trait]
    impl KeyValueStorePort for Storage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        async fn remove(&self, key: &str) -> Result<(), StorageError>;
    }
}

pub fn memory_storage() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Storage that rejects every call.
pub fn failing_storage() -> Arc<MockStorage> {
    let mut mock = MockStorage::new();
    mock.expect_get()
        .returning(|_| Err(StorageError::Io("device storage unavailable".to_string())));
    mock.expect_set()
        .returning(|_, _| Err(StorageError::Io("device storage unavailable".to_string())));
    mock.expect_remove()
        .returning(|_| Err(StorageError::Io("device storage unavailable".to_string())));
    Arc::new(mock)
}

pub fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn fixed_clock(secs: i64) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(instant(secs)))
}
