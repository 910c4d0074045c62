//! Menuz application layer
//!
//! Persisted preference stores built on [`mz_core::ports::KeyValueStorePort`]
//! and the use cases screens call into.

pub mod stores;
pub mod usecases;

pub use stores::{AnonymousAuthStore, OnboardingStore, UserPreferencesStore};
pub use usecases::{CompletePreferenceFlow, LaunchRoute, ResetLocalState, ResolveLaunchRoute};

#[cfg(test)]
pub(crate) mod test_support;
