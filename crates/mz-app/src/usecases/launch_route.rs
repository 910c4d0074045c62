//! Use case for deciding the first screen on launch
//! 启动时决定首个页面的用例

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, Instrument};

use crate::stores::{AnonymousAuthStore, OnboardingStore, UserPreferencesStore};

/// First screen shown after launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchRoute {
    /// Onboarding / welcome flow
    Welcome,
    /// Preference capture flow
    Preferences,
    /// Main restaurant browsing tabs
    Home,
}

/// Use case for resolving the launch route.
///
/// ## Behavior / 行为
/// - Onboarding not completed → `Welcome`
/// - Onboarding completed, signed-in session, preferences missing or
///   unfinished → `Preferences`
/// - Otherwise → `Home`
///
/// Every read is fail-open, so a storage fault lands on `Welcome` instead of
/// an error.
pub struct ResolveLaunchRoute {
    anonymous_auth: Arc<AnonymousAuthStore>,
    onboarding: Arc<OnboardingStore>,
    preferences: Arc<UserPreferencesStore>,
}

impl ResolveLaunchRoute {
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

    pub async fn execute(&self) -> LaunchRoute {
        let span = info_span!("usecase.resolve_launch_route.execute");

        async {
            if !self.onboarding.is_completed().await {
                info!(route = ?LaunchRoute::Welcome, "onboarding not completed");
                return LaunchRoute::Welcome;
            }

            let is_anonymous = self.anonymous_auth.is_anonymous().await;
            let preferences_complete = self
                .preferences
                .get()
                .await
                .is_some_and(|p| p.is_complete);

            let route = if !is_anonymous && !preferences_complete {
                LaunchRoute::Preferences
            } else {
                LaunchRoute::Home
            };

            info!(?route, is_anonymous, preferences_complete, "launch route resolved");
            route
        }
        .instrument(span)
        .await
    }
}
