use crate::models::{DinerList, ImageSlot, ImageState, Recipe, WeeklyPlan};
use crate::planner::constants::CURRENCY_SYMBOL;
use crate::planner::portions::{format_multiplier, summarize_diners};

/// Star string for a rating, e.g. `★★★½☆`.
pub fn stars(rating: f64) -> String {
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5usize.saturating_sub(full + usize::from(half));
    format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    )
}

/// Show who is eating and the resulting serving factor.
pub fn display_diners(diners: &DinerList) {
    let summary = summarize_diners(diners.as_slice());
    println!(
        "Diners: {} ({} people, {} standard servings)",
        summary.composition,
        summary.headcount,
        format_multiplier(summary.total_multiplier)
    );
}

/// Print a full recipe.
///
/// `multiplier` is shown as a reminder that quantities are already scaled.
pub fn display_recipe(recipe: &Recipe, multiplier: Option<f64>) {
    println!();
    println!("=== {} ===", recipe.name);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!();

    let rating = recipe
        .rating
        .map(|r| format!("  {} ({:.1})", stars(r), r))
        .unwrap_or_default();
    println!(
        "{} min | {:.2} {} per person | {} | {}{}",
        recipe.prep_time,
        recipe.cost_per_person,
        CURRENCY_SYMBOL,
        recipe.dinner_type,
        recipe.source,
        rating
    );
    println!("id: {}", recipe.id);

    println!();
    match multiplier {
        Some(m) => println!("--- Ingredients (for {} servings) ---", format_multiplier(m)),
        None => println!("--- Ingredients ---"),
    }
    if recipe.ingredients.is_empty() {
        println!("  (none)");
    }
    for ingredient in &recipe.ingredients {
        println!("  › {} {}", ingredient.quantity, ingredient.name);
    }

    println!();
    println!("--- Preparation ---");
    if recipe.instructions.is_empty() {
        println!("  (none)");
    }
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("{:>3}. {}", i + 1, step);
    }
    println!();
}

/// Print the week's dinners followed by the grouped shopping list.
pub fn display_weekly_plan(plan: &WeeklyPlan, multiplier: Option<f64>) {
    println!();
    println!("=== Your weekly dinner plan ===");

    let max_day_len = plan.days().map(|(day, _)| day.len()).max().unwrap_or(9);
    for (day, recipe) in plan.days() {
        let rating = recipe.rating.map(|r| format!("  {}", stars(r))).unwrap_or_default();
        println!(
            "  {:<width$}  {} ({} min, {:.2} {}) [{}]{}",
            day,
            recipe.name,
            recipe.prep_time,
            recipe.cost_per_person,
            CURRENCY_SYMBOL,
            recipe.short_id(),
            rating,
            width = max_day_len
        );
    }

    for (day, recipe) in plan.days() {
        println!();
        println!("##### {} #####", day);
        display_recipe(recipe, multiplier);
    }

    display_shopping_list(plan);
}

/// Print the shopping list grouped by category.
pub fn display_shopping_list(plan: &WeeklyPlan) {
    println!("=== Shopping list ===");
    if plan.shopping_list.is_empty() {
        println!("  (empty)");
        println!();
        return;
    }

    for (category, items) in plan.shopping_by_category() {
        println!();
        println!("[{}]", category);
        for item in items {
            println!("  - {}: {}", item.name, item.quantity);
        }
    }
    println!();
}

/// Print the saved recipe collection.
pub fn display_saved_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No saved recipes yet. Rate a generated recipe above 2.5 stars to keep it.");
        return;
    }

    println!();
    println!("=== Saved recipes ({}) ===", recipes.len());
    println!();

    let max_name_len = recipes.iter().map(|r| r.name.chars().count()).max().unwrap_or(10);
    for recipe in recipes {
        let rating = recipe.rating.map(stars).unwrap_or_else(|| "unrated".to_string());
        println!(
            "  [{}] {:<width$}  {:<15} {:<4} {}",
            recipe.short_id(),
            recipe.name,
            recipe.dinner_type.as_str(),
            recipe.source.to_string(),
            rating,
            width = max_name_len
        );
    }
    println!();
}

/// Describe the state of a recipe's image widget.
pub fn display_image_slot(slot: &ImageSlot) {
    match slot.state() {
        ImageState::NoImage => println!("No image yet."),
        ImageState::Generating => println!("Generating image..."),
        ImageState::Editing(_) => println!("Editing image..."),
        ImageState::Displayed(url) => println!("Image ready ({}).", url.mime_type),
    }
    if let Some(error) = slot.error() {
        println!("{}", error);
    }
}
