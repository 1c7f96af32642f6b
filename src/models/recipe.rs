use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DinnerTypeId;

/// Highest allowed star rating.
pub const MAX_RATING: f64 = 5.0;

/// Where a recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    #[default]
    Ai,
    User,
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSource::Ai => f.write_str("ai"),
            RecipeSource::User => f.write_str("user"),
        }
    }
}

/// A single ingredient line, e.g. `150g` of `Rice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Free-form amount with its unit embedded.
    pub quantity: String,
    pub name: String,
}

impl RecipeIngredient {
    pub fn new(quantity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            name: name.into(),
        }
    }
}

/// The content of a recipe without identity.
///
/// This is both the shape the model is asked to return and the shape the
/// recipe form edits. Every field is required when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    /// Minutes.
    pub prep_time: i64,
    /// Cost for one standard person.
    pub cost_per_person: f64,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
}

/// A stored or displayed recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    /// Stars in [0, 5] on a half-point grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    pub name: String,
    pub description: String,
    pub prep_time: i64,
    pub cost_per_person: f64,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(rename = "type")]
    pub dinner_type: DinnerTypeId,

    #[serde(default)]
    pub source: RecipeSource,
}

impl Recipe {
    /// Stamp a draft with a fresh id, its dinner type and source.
    pub fn from_draft(draft: RecipeDraft, dinner_type: DinnerTypeId, source: RecipeSource) -> Self {
        Self {
            id: new_recipe_id(),
            rating: None,
            name: draft.name,
            description: draft.description,
            prep_time: draft.prep_time,
            cost_per_person: draft.cost_per_person,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            dinner_type,
            source,
        }
    }

    /// Replace the editable content, keeping identity, type, source and rating.
    pub fn apply_draft(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.prep_time = draft.prep_time;
        self.cost_per_person = draft.cost_per_person;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
    }

    /// The editable content as a draft, for pre-filling the form.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            prep_time: self.prep_time,
            cost_per_person: self.cost_per_person,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    pub fn is_ai(&self) -> bool {
        self.source == RecipeSource::Ai
    }

    /// First eight characters of the id, enough to address it from the CLI.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Generate a unique recipe id.
pub fn new_recipe_id() -> String {
    Uuid::new_v4().to_string()
}

/// Ratings must lie in [0, 5] on a half-point grid.
pub fn is_valid_rating(rating: f64) -> bool {
    (0.0..=MAX_RATING).contains(&rating) && (rating * 2.0).fract() == 0.0
}
