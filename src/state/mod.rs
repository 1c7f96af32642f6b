mod persistence;
mod store;

pub use persistence::{backup_path, load_recipes, save_recipes};
pub use store::{RateOutcome, RecipeStore};
