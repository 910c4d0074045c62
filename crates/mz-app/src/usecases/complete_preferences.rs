//! Use case for finishing the preference capture flow
//! 完成偏好设置流程的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use mz_core::preferences::{UserPreferences, UserPreferencesPatch};
use tracing::{info, info_span, Instrument};

use crate::stores::{OnboardingStore, UserPreferencesStore};

/// Use case for submitting the final preference step.
///
/// ## Behavior / 行为
/// - Applies the submitted patch with `is_complete = true`
/// - Propagates preference write failures (the screen shows a retry state)
/// - Marks onboarding completed, best effort
pub struct CompletePreferenceFlow {
    preferences: Arc<UserPreferencesStore>,
    onboarding: Arc<OnboardingStore>,
}

impl CompletePreferenceFlow {
    pub fn new(preferences: Arc<UserPreferencesStore>, onboarding: Arc<OnboardingStore>) -> Self {
        Self {
            preferences,
            onboarding,
        }
    }

    pub async fn execute(&self, patch: UserPreferencesPatch) -> Result<UserPreferences> {
        let span = info_span!("usecase.complete_preference_flow.execute");

        async {
            let patch = UserPreferencesPatch {
                is_complete: Some(true),
                ..patch
            };

            let saved = self
                .preferences
                .update(patch)
                .await
                .context("failed to save user preferences")?;

            self.onboarding.set_completed().await;

            info!(completed_at = ?saved.completed_at, "preference flow completed");
            Ok(saved)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failing_storage, fixed_clock, instant, memory_storage};
    use mz_core::ports::KeyValueStorePort;
    use mz_core::preferences::BudgetRange;

    fn build(
        storage: Arc<dyn KeyValueStorePort>,
    ) -> (CompletePreferenceFlow, Arc<OnboardingStore>) {
        let onboarding = Arc::new(OnboardingStore::new(storage.clone()));
        let preferences = Arc::new(UserPreferencesStore::new(
            storage,
            fixed_clock(1_700_000_000),
        ));
        (
            CompletePreferenceFlow::new(preferences, onboarding.clone()),
            onboarding,
        )
    }

    #[tokio::test]
    async fn test_execute_marks_preferences_and_onboarding_complete() {
        let (uc, onboarding) = build(memory_storage());

        let saved = uc
            .execute(UserPreferencesPatch {
                budget_range: Some(BudgetRange::Budget),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(saved.is_complete);
        assert_eq!(saved.completed_at, Some(instant(1_700_000_000)));
        assert_eq!(saved.budget_range, BudgetRange::Budget);
        assert!(onboarding.is_completed().await);
    }

    #[tokio::test]
    async fn test_execute_overrides_is_complete_false() {
        let (uc, _) = build(memory_storage());

        let saved = uc
            .execute(UserPreferencesPatch {
                is_complete: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(saved.is_complete);
    }

    #[tokio::test]
    async fn test_execute_propagates_storage_failure() {
        let (uc, _) = build(failing_storage());

        let result = uc.execute(UserPreferencesPatch::default()).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("failed to save user preferences"));
    }
}
