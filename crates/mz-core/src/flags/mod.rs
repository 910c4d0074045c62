//! Persisted flag conventions
//!
//! A flag is a boolean persisted as a string: it is set only when the stored
//! value is exactly [`FLAG_TRUE`]. Absent keys and every other value read as
//! `false`.

pub mod keys;

pub use keys::*;

/// Literal written for a set flag.
pub const FLAG_TRUE: &str = "true";

/// Interpret a raw stored value as a flag.
pub fn is_flag_set(value: Option<&str>) -> bool {
    value == Some(FLAG_TRUE)
}

/// Storage keys backing the onboarding flag.
///
/// `legacy` keys are read in declared order and migrated to `primary` on
/// first hit. They are never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingKeys {
    pub primary: String,
    pub legacy: Vec<String>,
}

impl OnboardingKeys {
    pub fn new(
        primary: impl Into<String>,
        legacy: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            primary: primary.into(),
            legacy: legacy.into_iter().map(Into::into).collect(),
        }
    }

    /// Primary key followed by every legacy key.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.legacy.iter().map(String::as_str))
    }
}

impl Default for OnboardingKeys {
    fn default() -> Self {
        Self::new(ONBOARDING_COMPLETED_KEY, LEGACY_ONBOARDING_KEYS.iter().copied())
    }
}
