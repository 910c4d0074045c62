//! Integration tests for the preference stores
//!
//! Runs the stores and use cases against the file-backed store, the way the
//! app wires them at startup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mz_app::{
    AnonymousAuthStore, CompletePreferenceFlow, LaunchRoute, OnboardingStore, ResetLocalState,
    ResolveLaunchRoute, UserPreferencesStore,
};
use mz_core::ports::{KeyValueStorePort, StorageError};
use mz_core::preferences::UserPreferencesPatch;
use mz_infra::time::FixedClock;
use mz_infra::FileKeyValueStore;
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

struct Stores {
    anonymous_auth: Arc<AnonymousAuthStore>,
    onboarding: Arc<OnboardingStore>,
    preferences: Arc<UserPreferencesStore>,
}

fn stores(storage: Arc<dyn KeyValueStorePort>) -> Stores {
    let clock = Arc::new(FixedClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    Stores {
        anonymous_auth: Arc::new(AnonymousAuthStore::new(storage.clone())),
        onboarding: Arc::new(OnboardingStore::new(storage.clone())),
        preferences: Arc::new(UserPreferencesStore::new(storage, clock)),
    }
}

/// Storage whose every call fails, as when device storage is unavailable.
struct UnavailableStorage;

#[async_trait]
impl KeyValueStorePort for UnavailableStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("unavailable".to_string()))
    }
}

#[tokio::test]
async fn test_full_onboarding_flow_persists_across_restarts() {
    init_tracing();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("store.json");

    {
        let s = stores(Arc::new(FileKeyValueStore::new(path.clone())));
        let resolve = ResolveLaunchRoute::new(
            s.anonymous_auth.clone(),
            s.onboarding.clone(),
            s.preferences.clone(),
        );
        assert_eq!(resolve.execute().await, LaunchRoute::Welcome);

        s.preferences
            .update(UserPreferencesPatch {
                spice_tolerance: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        let complete = CompletePreferenceFlow::new(s.preferences.clone(), s.onboarding.clone());
        complete
            .execute(UserPreferencesPatch {
                cuisine_preferences: Some(vec!["japanese".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    // new process, same file
    let s = stores(Arc::new(FileKeyValueStore::new(path)));
    let resolve = ResolveLaunchRoute::new(
        s.anonymous_auth.clone(),
        s.onboarding.clone(),
        s.preferences.clone(),
    );
    assert_eq!(resolve.execute().await, LaunchRoute::Home);

    let prefs = s.preferences.get().await.unwrap();
    assert_eq!(prefs.spice_tolerance, 3);
    assert_eq!(prefs.cuisine_preferences, vec!["japanese".to_string()]);
    assert!(prefs.is_complete);
    assert!(prefs.completed_at.is_some());
}

#[tokio::test]
async fn test_legacy_onboarding_key_from_older_install_is_migrated() {
    init_tracing();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("store.json");
    tokio::fs::write(&path, r#"{"hasCompletedOnboarding":"true"}"#)
        .await
        .unwrap();

    let storage = Arc::new(FileKeyValueStore::new(path));
    let s = stores(storage.clone());

    assert!(s.onboarding.is_completed().await);
    assert_eq!(
        storage.get("onboarding.completed").await.unwrap(),
        Some("true".to_string())
    );
}

#[tokio::test]
async fn test_reset_local_state_clears_everything() {
    init_tracing();
    let temp_dir = tempdir().unwrap();
    let s = stores(Arc::new(FileKeyValueStore::new(
        temp_dir.path().join("store.json"),
    )));

    s.anonymous_auth.set_anonymous().await;
    s.onboarding.set_completed().await;
    s.preferences.save(&s.preferences.get_default()).await.unwrap();

    ResetLocalState::new(
        s.anonymous_auth.clone(),
        s.onboarding.clone(),
        s.preferences.clone(),
    )
    .execute()
    .await
    .unwrap();

    assert!(!s.anonymous_auth.is_anonymous().await);
    assert!(!s.onboarding.is_completed().await);
    assert_eq!(s.preferences.get().await, None);
}

#[tokio::test]
async fn test_unavailable_storage_fails_open_for_reads_only() {
    init_tracing();
    let s = stores(Arc::new(UnavailableStorage));

    assert!(!s.anonymous_auth.is_anonymous().await);
    assert!(!s.onboarding.is_completed().await);
    assert_eq!(s.preferences.get().await, None);

    let save = s.preferences.save(&s.preferences.get_default()).await;
    assert_eq!(save, Err(StorageError::Io("unavailable".to_string())));
}

#[tokio::test]
async fn test_corrupt_store_file_fails_open() {
    init_tracing();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("store.json");
    tokio::fs::write(&path, "not json at all").await.unwrap();

    let s = stores(Arc::new(FileKeyValueStore::new(path)));

    assert!(!s.onboarding.is_completed().await);
    assert!(s
        .preferences
        .update(UserPreferencesPatch::default())
        .await
        .is_err());
}

#[tokio::test]
async fn test_writes_recover_after_corrupt_store_file() {
    init_tracing();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("store.json");
    tokio::fs::write(&path, "garbage").await.unwrap();

    let s = stores(Arc::new(FileKeyValueStore::new(path)));

    let doc = s.preferences.get_default();
    s.preferences.save(&doc).await.unwrap();
    assert_eq!(s.preferences.get().await, Some(doc));

    s.onboarding.set_completed().await;
    assert!(s.onboarding.is_completed().await);

    ResetLocalState::new(
        s.anonymous_auth.clone(),
        s.onboarding.clone(),
        s.preferences.clone(),
    )
    .execute()
    .await
    .unwrap();

    assert!(!s.onboarding.is_completed().await);
    assert_eq!(s.preferences.get().await, None);
}
