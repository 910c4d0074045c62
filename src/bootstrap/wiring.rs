//! # Dependency Injection / 依赖注入模块
//!
//! Builds the infra adapters and injects them into the stores and use cases.
//! Assembly only: no routing or storage decisions are made here.
//!
//! This is the only place allowed to depend on mz-infra and mz-app at once.

use std::sync::Arc;

use mz_app::{
    AnonymousAuthStore, CompletePreferenceFlow, OnboardingStore, ResetLocalState,
    ResolveLaunchRoute, UserPreferencesStore,
};
use mz_core::config::AppConfig;
use mz_core::ports::{ClockPort, KeyValueStorePort};
use mz_infra::{FileKeyValueStore, SystemClock};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Storage initialization failed: {0}")]
    StorageInit(String),
}

/// Every store, sharing one storage port.
#[derive(Clone)]
pub struct AppStores {
    pub anonymous_auth: Arc<AnonymousAuthStore>,
    pub onboarding: Arc<OnboardingStore>,
    pub preferences: Arc<UserPreferencesStore>,
}

impl AppStores {
    pub fn new(storage: Arc<dyn KeyValueStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            anonymous_auth: Arc::new(AnonymousAuthStore::new(storage.clone())),
            onboarding: Arc::new(OnboardingStore::new(storage.clone())),
            preferences: Arc::new(UserPreferencesStore::new(storage, clock)),
        }
    }

    pub fn resolve_launch_route(&self) -> ResolveLaunchRoute {
        ResolveLaunchRoute::new(
            self.anonymous_auth.clone(),
            self.onboarding.clone(),
            self.preferences.clone(),
        )
    }

    pub fn complete_preference_flow(&self) -> CompletePreferenceFlow {
        CompletePreferenceFlow::new(self.preferences.clone(), self.onboarding.clone())
    }

    pub fn reset_local_state(&self) -> ResetLocalState {
        ResetLocalState::new(
            self.anonymous_auth.clone(),
            self.onboarding.clone(),
            self.preferences.clone(),
        )
    }
}

/// Wire the file-backed store described by `config`.
///
/// Only the data directory is created here; the store file itself appears on
/// first write.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppStores> {
    std::fs::create_dir_all(&config.data_dir).map_err(|e| {
        WiringError::StorageInit(format!(
            "create data dir failed: {}: {e}",
            config.data_dir.display()
        ))
    })?;

    let storage: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::new(config.store_path()));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    tracing::debug!(path = %config.store_path().display(), "key-value store wired");
    Ok(AppStores::new(storage, clock))
}
