use std::sync::Arc;

use mz_core::flags::USER_PREFERENCES_KEY;
use mz_core::ports::{ClockPort, KeyValueStorePort, StorageError};
use mz_core::preferences::{UserPreferences, UserPreferencesPatch};
use tracing::{debug, info, warn};

/// Persisted user preferences document.
///
/// Unlike the flag stores, writes here carry explicit user input, so `save`,
/// `update` and `clear` propagate storage failures to the caller.
///
/// Concurrent `update` calls are last-write-wins: each reads a snapshot,
/// merges, and writes back, so one caller can overwrite the other's change.
/// There is a single writer per device in practice.
///
/// 用户偏好文档存储；写入失败会返回给调用方。
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mz_app::UserPreferencesStore;
/// use mz_core::preferences::UserPreferencesPatch;
/// use mz_infra::{InMemoryKeyValueStore, SystemClock};
///
/// # async fn example() -> Result<(), mz_core::ports::StorageError> {
/// let store = UserPreferencesStore::new(
///     Arc::new(InMemoryKeyValueStore::new()),
///     Arc::new(SystemClock),
/// );
///
/// let merged = store
///     .update(UserPreferencesPatch {
///         spice_tolerance: Some(3),
///         ..Default::default()
///     })
///     .await?;
/// assert_eq!(merged.spice_tolerance, 3);
/// assert_eq!(merged.budget_range, store.get_default().budget_range);
/// # Ok(())
/// # }
/// ```
pub struct UserPreferencesStore {
    storage: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl UserPreferencesStore {
    pub fn new(storage: Arc<dyn KeyValueStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { storage, clock }
    }

    /// Fresh default document. No I/O.
    pub fn get_default(&self) -> UserPreferences {
        UserPreferences::default()
    }

    /// Stored document, or `None` if never saved. An unparseable document is
    /// [`StorageError::Parse`].
    pub async fn try_get(&self) -> Result<Option<UserPreferences>, StorageError> {
        let Some(raw) = self.storage.get(USER_PREFERENCES_KEY).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Parse(format!("{USER_PREFERENCES_KEY}: {e}")))
    }

    /// Soft read: storage and parse failures are logged and read as `None`.
    /// Callers apply [`Self::get_default`] themselves.
    pub async fn get(&self) -> Option<UserPreferences> {
        self.try_get().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to load user preferences, treating as absent");
            None
        })
    }

    /// Replace the stored document.
    ///
    /// 整体替换已保存的文档。
    ///
    /// # Errors
    ///
    /// `StorageError::Serialize` if encoding fails, otherwise whatever the
    /// underlying port returns.
    pub async fn save(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        let json = serde_json::to_string(preferences)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(USER_PREFERENCES_KEY, &json).await?;
        debug!(is_complete = preferences.is_complete, "user preferences saved");
        Ok(())
    }

    /// Merge `patch` over the stored document and persist the result.
    ///
    /// 将补丁合并到已保存文档并持久化。
    ///
    /// ## Behavior / 行为
    /// - Fields absent from `patch` keep their stored value.
    /// - `completed_at` is set from the clock the first time `is_complete`
    ///   is `Some(true)` and never moves afterwards.
    ///
    /// When nothing is stored yet the merge starts from [`Self::get_default`],
    /// so the persisted document is always complete. Read, parse and write
    /// failures are all returned.
    pub async fn update(
        &self,
        patch: UserPreferencesPatch,
    ) -> Result<UserPreferences, StorageError> {
        let current = match self.try_get().await? {
            Some(current) => current,
            None => {
                debug!("no stored user preferences, seeding update from defaults");
                self.get_default()
            }
        };

        let changed_fields = patch.changed_fields().join(",");
        let was_complete = current.completed_at.is_some();
        let merged = patch.apply(current, self.clock.now());
        self.save(&merged).await?;

        if !was_complete && merged.completed_at.is_some() {
            info!(completed_at = ?merged.completed_at, "user preferences completed");
        }
        debug!(changed_fields = %changed_fields, "user preferences updated");

        Ok(merged)
    }

    /// Removes the stored document; later reads return `None`.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(USER_PREFERENCES_KEY).await
    }
}
