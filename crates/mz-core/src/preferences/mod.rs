//! User preference domain models
//!
//! This module defines the preferences document captured during onboarding
//! (dietary restrictions, cuisines, spice tolerance, dining styles, budget),
//! its partial-update patch, and the static option catalogs the UI renders
//! choices from.

pub mod catalog;
mod defaults;
pub mod model;
pub mod patch;

pub use catalog::*;
pub use model::*;
pub use patch::UserPreferencesPatch;
