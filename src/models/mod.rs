mod diner;
mod dinner;
mod image;
mod plan;
mod recipe;

pub use diner::{DEFAULT_APPETITE, Diner, DinerList, EaterProfile};
pub use dinner::{DinnerType, DinnerTypeId};
pub use image::{DataUrl, ImageSlot, ImageState, PNG_MIME};
pub use plan::{
    DAYS_PER_WEEK, DEFAULT_CATEGORY, GeneratedPlan, ShoppingListItem, WEEKDAY_NAMES, WeeklyPlan,
};
pub use recipe::{
    MAX_RATING, Recipe, RecipeDraft, RecipeIngredient, RecipeSource, is_valid_rating,
    new_recipe_id,
};
