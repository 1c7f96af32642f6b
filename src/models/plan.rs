use serde::{Deserialize, Serialize};

use crate::models::{Recipe, RecipeDraft};

/// Category used when the model leaves one out.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Number of dinners in a weekly plan.
pub const DAYS_PER_WEEK: usize = 7;

/// Day names, Monday first, indexed by position in the plan.
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One consolidated line of the weekly shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    /// Total for the whole group over the week.
    pub quantity: String,
    #[serde(default)]
    pub category: String,
}

impl ShoppingListItem {
    /// Category label, falling back to [`DEFAULT_CATEGORY`] when blank.
    pub fn category_or_default(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            DEFAULT_CATEGORY
        } else {
            trimmed
        }
    }
}

/// The raw weekly plan as the model returns it, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub weekly_recipes: Vec<RecipeDraft>,
    pub shopping_list: Vec<ShoppingListItem>,
}

/// Seven dinners, Monday to Sunday, plus the shopping list covering them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub weekly_recipes: Vec<Recipe>,
    pub shopping_list: Vec<ShoppingListItem>,
}

impl WeeklyPlan {
    /// Recipes paired with their day name.
    pub fn days(&self) -> impl Iterator<Item = (&'static str, &Recipe)> {
        WEEKDAY_NAMES.iter().copied().zip(self.weekly_recipes.iter())
    }

    /// Shopping list grouped by category, categories in first-seen order.
    pub fn shopping_by_category(&self) -> Vec<(String, Vec<&ShoppingListItem>)> {
        let mut groups: Vec<(String, Vec<&ShoppingListItem>)> = Vec::new();
        for item in &self.shopping_list {
            let category = item.category_or_default();
            match groups.iter_mut().find(|(name, _)| name == category) {
                Some((_, items)) => items.push(item),
                None => groups.push((category.to_string(), vec![item])),
            }
        }
        groups
    }
}
