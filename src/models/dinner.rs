use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of a dinner type.
///
/// `Custom` only tags user-authored recipes; it has no catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DinnerTypeId {
    Light,
    MuscleRecovery,
    LowCalorie,
    Energetic,
    Social,
    Custom,
}

impl DinnerTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DinnerTypeId::Light => "light",
            DinnerTypeId::MuscleRecovery => "muscle-recovery",
            DinnerTypeId::LowCalorie => "low-calorie",
            DinnerTypeId::Energetic => "energetic",
            DinnerTypeId::Social => "social",
            DinnerTypeId::Custom => "custom",
        }
    }
}

impl fmt::Display for DinnerTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind of dinner with its nutritional goal.
///
/// Defined once in static configuration (see `planner::constants::DINNER_TYPES`).
#[derive(Debug, Clone, PartialEq)]
pub struct DinnerType {
    pub id: DinnerTypeId,
    pub title: &'static str,
    pub objective: &'static str,
    /// Free-text nutritional guidelines, embedded verbatim in prompts.
    pub guidelines: &'static str,
    /// Ordered preferred ingredient names. Empty means no preference.
    pub preferred_ingredients: &'static [&'static str],
}

impl DinnerType {
    /// Whether the preferred ingredients are only loose inspiration.
    pub fn ingredients_are_optional(&self) -> bool {
        self.id == DinnerTypeId::Social
    }

    pub fn has_preferred_ingredients(&self) -> bool {
        !self.preferred_ingredients.is_empty()
    }
}
