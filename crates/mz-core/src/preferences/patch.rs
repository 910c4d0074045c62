//! Partial updates to [`UserPreferences`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{BudgetRange, UserPreferences};

/// A shallow partial document: supplied fields overwrite, omitted fields keep
/// their prior value.
///
/// `completed_at` is not patchable; it is derived from `is_complete` during
/// [`UserPreferencesPatch::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_preferences: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_tolerance: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dining_styles: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl UserPreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the supplied fields, in wire spelling. Used for logging.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.dietary_restrictions.is_some() {
            fields.push("dietaryRestrictions");
        }
        if self.cuisine_preferences.is_some() {
            fields.push("cuisinePreferences");
        }
        if self.spice_tolerance.is_some() {
            fields.push("spiceTolerance");
        }
        if self.dining_styles.is_some() {
            fields.push("diningStyles");
        }
        if self.budget_range.is_some() {
            fields.push("budgetRange");
        }
        if self.is_complete.is_some() {
            fields.push("isComplete");
        }
        fields
    }

    /// Merge this patch over `current`.
    ///
    /// `completed_at` becomes `now` the first time the patch sets `is_complete`
    /// to true. An existing timestamp is never moved or cleared.
    pub fn apply(self, current: UserPreferences, now: DateTime<Utc>) -> UserPreferences {
        let completed_at = match (self.is_complete, current.completed_at) {
            (_, Some(existing)) => Some(existing),
            (Some(true), None) => Some(now),
            _ => None,
        };

        UserPreferences {
            dietary_restrictions: self
                .dietary_restrictions
                .unwrap_or(current.dietary_restrictions),
            cuisine_preferences: self
                .cuisine_preferences
                .unwrap_or(current.cuisine_preferences),
            spice_tolerance: self.spice_tolerance.unwrap_or(current.spice_tolerance),
            dining_styles: self.dining_styles.unwrap_or(current.dining_styles),
            budget_range: self.budget_range.unwrap_or(current.budget_range),
            is_complete: self.is_complete.unwrap_or(current.is_complete),
            completed_at,
        }
    }
}
