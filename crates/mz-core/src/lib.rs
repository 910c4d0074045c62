//! # mz-core
//!
//! Core domain models and storage contracts for Menuz.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! the persisted flag conventions, the user preferences document and its merge
//! rules, the static option catalogs, and the ports implemented by `mz-infra`.

pub mod config;
pub mod flags;
pub mod ports;
pub mod preferences;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use flags::OnboardingKeys;
pub use ports::{ClockPort, KeyValueStorePort, StorageError};
pub use preferences::{BudgetRange, UserPreferences, UserPreferencesPatch};
