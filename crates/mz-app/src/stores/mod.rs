//! Persisted stores
//!
//! Each store owns one slice of the key layout and receives its storage port
//! at construction. Stores never call each other.
//!
//! Error policy:
//! - soft reads used for routing (`is_anonymous`, `is_completed`,
//!   preferences `get`) fail open to `false` / `None` and log a warning;
//! - best-effort flag writes (`set_*`, flag `clear`) log and swallow;
//! - user-data writes (preferences `save` / `update` / `clear`) return `Err`.
//!
//! Every infallible method is a thin wrapper over a `try_*` twin returning
//! `Result`, so the fail-open decision stays visible in one place.

mod anonymous_auth;
mod onboarding;
mod user_preferences;

pub use anonymous_auth::AnonymousAuthStore;
pub use onboarding::OnboardingStore;
pub use user_preferences::UserPreferencesStore;
