use std::sync::Arc;

use futures::future::join_all;
use mz_core::flags::{is_flag_set, OnboardingKeys, FLAG_TRUE};
use mz_core::ports::{KeyValueStorePort, StorageError};
use tracing::{debug, info, warn};

/// Onboarding-completed flag with migration from legacy keys.
///
/// A previous key naming scheme must not strand already-onboarded users: when
/// the primary key is not set but a legacy key is, the read path writes the
/// primary key once, so later reads never scan legacy keys again.
///
/// 引导完成标记；读取时自动从旧键迁移到主键。
///
/// ## Behavior / 行为
/// - Primary key first, then legacy keys in declared order.
/// - Legacy keys are only read and removed, never written.
/// - Reads fail open to `false`; `set_completed` and `clear` are best effort.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mz_app::OnboardingStore;
/// use mz_infra::InMemoryKeyValueStore;
///
/// # async fn example() {
/// let storage = Arc::new(InMemoryKeyValueStore::with_entries([(
///     "hasCompletedOnboarding",
///     "true",
/// )]));
/// let store = OnboardingStore::new(storage);
///
/// // migrated on first read
/// assert!(store.is_completed().await);
/// # }
/// ```
pub struct OnboardingStore {
    storage: Arc<dyn KeyValueStorePort>,
    keys: OnboardingKeys,
}

impl OnboardingStore {
    pub fn new(storage: Arc<dyn KeyValueStorePort>) -> Self {
        Self::with_keys(storage, OnboardingKeys::default())
    }

    /// Store over a custom primary / legacy key set.
    pub fn with_keys(storage: Arc<dyn KeyValueStorePort>, keys: OnboardingKeys) -> Self {
        Self { storage, keys }
    }

    pub fn keys(&self) -> &OnboardingKeys {
        &self.keys
    }

    /// Checks the primary key, then each legacy key, migrating the first hit.
    ///
    /// 依次检查主键与旧键，命中旧键时写回主键。
    ///
    /// # Errors
    ///
    /// Any error, including a failed migration write, aborts the whole check.
    pub async fn try_is_completed(&self) -> Result<bool, StorageError> {
        let primary = self.storage.get(&self.keys.primary).await?;
        if is_flag_set(primary.as_deref()) {
            return Ok(true);
        }

        for legacy_key in &self.keys.legacy {
            let value = self.storage.get(legacy_key).await?;
            if is_flag_set(value.as_deref()) {
                self.storage.set(&self.keys.primary, FLAG_TRUE).await?;
                info!(
                    legacy_key = %legacy_key,
                    primary_key = %self.keys.primary,
                    "migrated onboarding flag from legacy key"
                );
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Fails open to `false`, routing the user back through onboarding.
    pub async fn is_completed(&self) -> bool {
        self.try_is_completed().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to read onboarding flag, assuming not completed");
            false
        })
    }

    /// Writes the primary key only. Legacy keys are never written.
    pub async fn try_set_completed(&self) -> Result<(), StorageError> {
        self.storage.set(&self.keys.primary, FLAG_TRUE).await
    }

    /// 写入主键，失败仅记录日志。
    pub async fn set_completed(&self) {
        if let Err(err) = self.try_set_completed().await {
            warn!(error = %err, "failed to persist onboarding flag");
        }
    }

    /// Removes the primary key and every legacy key concurrently.
    ///
    /// Every removal is attempted; the first failure is returned.
    pub async fn try_clear(&self) -> Result<(), StorageError> {
        let removals = self.keys.all().map(|key| self.storage.remove(key));
        let results = join_all(removals).await;

        let mut first_err = None;
        for (key, result) in self.keys.all().zip(results) {
            match result {
                Ok(()) => debug!(key, "onboarding key removed"),
                Err(err) => {
                    warn!(key, error = %err, "failed to remove onboarding key");
                    first_err.get_or_insert(err);
                }
            }
        }

        first_err.map_or(Ok(()), Err)
    }

    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            warn!(error = %err, "failed to clear onboarding flags");
        }
    }
}
