use std::sync::Arc;

use mz_core::flags::{is_flag_set, ANONYMOUS_AUTH_KEY, FLAG_TRUE};
use mz_core::ports::{KeyValueStorePort, StorageError};
use tracing::warn;

/// Remembers whether the current session is an anonymous / guest session.
///
/// 记录当前会话是否为匿名 / 访客会话。
///
/// ## Behavior / 行为
/// - Set only when the stored value is exactly `"true"`.
/// - Reads fail open to `false`; writes are best effort.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mz_app::AnonymousAuthStore;
/// use mz_infra::InMemoryKeyValueStore;
///
/// # async fn example() {
/// let store = AnonymousAuthStore::new(Arc::new(InMemoryKeyValueStore::new()));
/// store.set_anonymous().await;
/// assert!(store.is_anonymous().await);
/// # }
/// ```
pub struct AnonymousAuthStore {
    storage: Arc<dyn KeyValueStorePort>,
}

impl AnonymousAuthStore {
    pub fn new(storage: Arc<dyn KeyValueStorePort>) -> Self {
        Self { storage }
    }

    /// Reads the flag, surfacing storage failures.
    pub async fn try_is_anonymous(&self) -> Result<bool, StorageError> {
        let value = self.storage.get(ANONYMOUS_AUTH_KEY).await?;
        Ok(is_flag_set(value.as_deref()))
    }

    /// Fails open to `false` so auth and onboarding flows proceed normally.
    pub async fn is_anonymous(&self) -> bool {
        self.try_is_anonymous().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to read anonymous flag, assuming signed-in session");
            false
        })
    }

    pub async fn try_set_anonymous(&self) -> Result<(), StorageError> {
        self.storage.set(ANONYMOUS_AUTH_KEY, FLAG_TRUE).await
    }

    /// Marks the session as anonymous. Failures are logged and swallowed.
    ///
    /// 标记为匿名会话；失败仅记录日志。
    pub async fn set_anonymous(&self) {
        if let Err(err) = self.try_set_anonymous().await {
            warn!(error = %err, "failed to persist anonymous flag");
        }
    }

    pub async fn try_clear(&self) -> Result<(), StorageError> {
        self.storage.remove(ANONYMOUS_AUTH_KEY).await
    }

    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            warn!(error = %err, "failed to clear anonymous flag");
        }
    }
}
