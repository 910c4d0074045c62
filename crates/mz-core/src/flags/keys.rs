/// Anonymous / guest session flag.
pub const ANONYMOUS_AUTH_KEY: &str = "auth.user.is_anony_or_guest";

/// Primary onboarding-completed flag.
pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding.completed";

/// Deprecated onboarding keys, read and migrated in this order.
///
/// `onboarding_completed` was written by a second, independent onboarding
/// flow; it is folded into the same flag here.
pub const LEGACY_ONBOARDING_KEYS: &[&str] = &["hasCompletedOnboarding", "onboarding_completed"];

/// JSON-encoded user preferences document.
pub const USER_PREFERENCES_KEY: &str = "user_preferences";
