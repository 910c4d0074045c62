use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spice tolerance assigned to a fresh document.
pub const DEFAULT_SPICE_TOLERANCE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Budget,
    Moderate,
    Premium,
    Luxury,
}

impl BudgetRange {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetRange::Budget => "budget",
            BudgetRange::Moderate => "moderate",
            BudgetRange::Premium => "premium",
            BudgetRange::Luxury => "luxury",
        }
    }
}

/// Preferences captured by the onboarding preference flow.
///
/// Persisted as JSON with camelCase field names. Fields missing from a stored
/// document fall back to their defaults, since earlier writers could persist
/// partial documents.
///
/// 用户偏好文档。`completed_at` 只会在 `is_complete` 第一次变为 true 时写入。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub cuisine_preferences: Vec<String>,

    /// Nominally 1..=4, see [`crate::preferences::SPICE_LEVELS`]. Not validated here.
    #[serde(default = "default_spice_tolerance")]
    pub spice_tolerance: u8,

    #[serde(default)]
    pub dining_styles: Vec<String>,

    #[serde(default = "default_budget_range")]
    pub budget_range: BudgetRange,

    #[serde(default)]
    pub is_complete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_spice_tolerance() -> u8 {
    DEFAULT_SPICE_TOLERANCE
}

fn default_budget_range() -> BudgetRange {
    BudgetRange::Moderate
}
