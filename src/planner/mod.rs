pub mod constants;
pub mod generator;
pub mod image;
pub mod portions;
pub mod prompt;
pub mod response;
pub mod schema;
pub mod week;

pub use constants::*;
pub use generator::{generate_recipe, generate_weekly_plan};
pub use image::{edit_in_slot, edit_recipe_image, generate_into_slot, generate_recipe_image};
pub use portions::{
    DinerSummary, diner_composition, summarize_diners, total_multiplier, unknown_appetites,
};
pub use prompt::{GenerationPrompt, build_recipe_prompt, build_weekly_prompt};
pub use response::{parse_model_json, parse_recipe, parse_weekly_plan, strip_code_fence};
pub use week::{default_week, random_week, resolve_dinner_type, resolve_dinner_types};
