//! Static option catalogs for the preference flow
//!
//! These are rendering data only. Stores never validate persisted
//! preferences against them.

use super::model::BudgetRange;

/// A selectable option identified by a string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    /// i18n key of the display label
    pub label_key: &'static str,
    pub description_key: Option<&'static str>,
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiceLevel {
    pub level: u8,
    pub label_key: &'static str,
    pub description_key: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetOption {
    pub range: BudgetRange,
    pub label_key: &'static str,
    pub description_key: &'static str,
    pub icon: &'static str,
}

const fn option(
    id: &'static str,
    label_key: &'static str,
    description_key: Option<&'static str>,
    icon: Option<&'static str>,
) -> CatalogOption {
    CatalogOption {
        id,
        label_key,
        description_key,
        icon,
    }
}

pub const DIETARY_RESTRICTIONS: &[CatalogOption] = &[
    option(
        "vegetarian",
        "preferences.dietary.vegetarian",
        Some("preferences.dietary.vegetarian_desc"),
        Some("leaf"),
    ),
    option(
        "vegan",
        "preferences.dietary.vegan",
        Some("preferences.dietary.vegan_desc"),
        Some("sprout"),
    ),
    option(
        "gluten_free",
        "preferences.dietary.gluten_free",
        Some("preferences.dietary.gluten_free_desc"),
        Some("wheat-off"),
    ),
    option(
        "dairy_free",
        "preferences.dietary.dairy_free",
        Some("preferences.dietary.dairy_free_desc"),
        Some("milk-off"),
    ),
    option(
        "nut_free",
        "preferences.dietary.nut_free",
        Some("preferences.dietary.nut_free_desc"),
        Some("nut-off"),
    ),
    option(
        "halal",
        "preferences.dietary.halal",
        Some("preferences.dietary.halal_desc"),
        Some("moon"),
    ),
    option(
        "kosher",
        "preferences.dietary.kosher",
        Some("preferences.dietary.kosher_desc"),
        Some("star"),
    ),
    option(
        "pescatarian",
        "preferences.dietary.pescatarian",
        Some("preferences.dietary.pescatarian_desc"),
        Some("fish"),
    ),
];

pub const CUISINE_OPTIONS: &[CatalogOption] = &[
    option("italian", "preferences.cuisine.italian", None, Some("pizza")),
    option("japanese", "preferences.cuisine.japanese", None, Some("sushi")),
    option("chinese", "preferences.cuisine.chinese", None, Some("bowl")),
    option("mexican", "preferences.cuisine.mexican", None, Some("taco")),
    option("indian", "preferences.cuisine.indian", None, Some("curry")),
    option("thai", "preferences.cuisine.thai", None, Some("chili")),
    option("french", "preferences.cuisine.french", None, Some("croissant")),
    option(
        "mediterranean",
        "preferences.cuisine.mediterranean",
        None,
        Some("olive"),
    ),
    option("korean", "preferences.cuisine.korean", None, Some("grill")),
    option(
        "vietnamese",
        "preferences.cuisine.vietnamese",
        None,
        Some("noodles"),
    ),
    option("american", "preferences.cuisine.american", None, Some("burger")),
    option(
        "middle_eastern",
        "preferences.cuisine.middle_eastern",
        None,
        Some("kebab"),
    ),
];

pub const SPICE_LEVELS: &[SpiceLevel] = &[
    SpiceLevel {
        level: 1,
        label_key: "preferences.spice.mild",
        description_key: "preferences.spice.mild_desc",
        icon: "pepper-1",
    },
    SpiceLevel {
        level: 2,
        label_key: "preferences.spice.medium",
        description_key: "preferences.spice.medium_desc",
        icon: "pepper-2",
    },
    SpiceLevel {
        level: 3,
        label_key: "preferences.spice.hot",
        description_key: "preferences.spice.hot_desc",
        icon: "pepper-3",
    },
    SpiceLevel {
        level: 4,
        label_key: "preferences.spice.extra_hot",
        description_key: "preferences.spice.extra_hot_desc",
        icon: "pepper-4",
    },
];

pub const DINING_STYLES: &[CatalogOption] = &[
    option(
        "fine_dining",
        "preferences.dining.fine_dining",
        Some("preferences.dining.fine_dining_desc"),
        Some("wine"),
    ),
    option(
        "casual",
        "preferences.dining.casual",
        Some("preferences.dining.casual_desc"),
        Some("utensils"),
    ),
    option(
        "fast_casual",
        "preferences.dining.fast_casual",
        Some("preferences.dining.fast_casual_desc"),
        Some("bolt"),
    ),
    option(
        "street_food",
        "preferences.dining.street_food",
        Some("preferences.dining.street_food_desc"),
        Some("truck"),
    ),
    option(
        "cafe",
        "preferences.dining.cafe",
        Some("preferences.dining.cafe_desc"),
        Some("coffee"),
    ),
    option(
        "buffet",
        "preferences.dining.buffet",
        Some("preferences.dining.buffet_desc"),
        Some("tray"),
    ),
];

const BUDGET_TIER: BudgetOption = BudgetOption {
    range: BudgetRange::Budget,
    label_key: "preferences.budget.budget",
    description_key: "preferences.budget.budget_desc",
    icon: "$",
};

const MODERATE_TIER: BudgetOption = BudgetOption {
    range: BudgetRange::Moderate,
    label_key: "preferences.budget.moderate",
    description_key: "preferences.budget.moderate_desc",
    icon: "$$",
};

const PREMIUM_TIER: BudgetOption = BudgetOption {
    range: BudgetRange::Premium,
    label_key: "preferences.budget.premium",
    description_key: "preferences.budget.premium_desc",
    icon: "$$$",
};

const LUXURY_TIER: BudgetOption = BudgetOption {
    range: BudgetRange::Luxury,
    label_key: "preferences.budget.luxury",
    description_key: "preferences.budget.luxury_desc",
    icon: "$$$$",
};

pub const BUDGET_RANGES: &[BudgetOption] = &[BUDGET_TIER, MODERATE_TIER, PREMIUM_TIER, LUXURY_TIER];

pub fn find_option(catalog: &'static [CatalogOption], id: &str) -> Option<&'static CatalogOption> {
    catalog.iter().find(|o| o.id == id)
}

pub fn spice_level(level: u8) -> Option<&'static SpiceLevel> {
    SPICE_LEVELS.iter().find(|s| s.level == level)
}

pub fn budget_option(range: BudgetRange) -> &'static BudgetOption {
    match range {
        BudgetRange::Budget => &BUDGET_TIER,
        BudgetRange::Moderate => &MODERATE_TIER,
        BudgetRange::Premium => &PREMIUM_TIER,
        BudgetRange::Luxury => &LUXURY_TIER,
    }
}
