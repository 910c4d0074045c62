use super::model::*;

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: Vec::new(),
            cuisine_preferences: Vec::new(),
            spice_tolerance: DEFAULT_SPICE_TOLERANCE,
            dining_styles: Vec::new(),
            budget_range: BudgetRange::Moderate,
            is_complete: false,
            completed_at: None,
        }
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        BudgetRange::Moderate
    }
}
