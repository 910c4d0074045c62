//! Use case for wiping locally persisted session state
//! 清除本地持久化状态的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use crate::stores::{AnonymousAuthStore, OnboardingStore, UserPreferencesStore};

/// Use case run on sign-out.
///
/// ## Behavior / 行为
/// - Clears the anonymous flag and every onboarding key (best effort)
/// - Clears the preferences document, propagating failures
pub struct ResetLocalState {
    anonymous_auth: Arc<AnonymousAuthStore>,
    onboarding: Arc<OnboardingStore>,
    preferences: Arc<UserPreferencesStore>,
}

impl ResetLocalState {
    pub fn new(
        anonymous_auth: Arc<AnonymousAuthStore>,
        onboarding: Arc<OnboardingStore>,
        preferences: Arc<UserPreferencesStore>,
    ) -> Self {
        Self {
            anonymous_auth,
            onboarding,
            preferences,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let span = info_span!("usecase.reset_local_state.execute");

        async {
            self.anonymous_auth.clear().await;
            self.onboarding.clear().await;
            self.preferences
                .clear()
                .await
                .context("failed to clear user preferences")?;

            info!("local state reset");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
