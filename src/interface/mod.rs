pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_shopping_list_csv;
pub use prompts::{
    prompt_diners, prompt_dinner_type, prompt_edit_instruction, prompt_rating,
    prompt_recipe_form, prompt_weekly_types, prompt_yes_no,
};
pub use render::{
    display_diners, display_image_slot, display_recipe, display_saved_recipes,
    display_shopping_list, display_weekly_plan, stars,
};
