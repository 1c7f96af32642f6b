use crate::ai::{AiClient, TextRequest};
use crate::error::{DinnerError, Operation, Result};
use crate::models::{
    DAYS_PER_WEEK, Diner, DinnerType, Recipe, RecipeSource, ShoppingListItem, WeeklyPlan,
};
use crate::planner::prompt::{GenerationPrompt, build_recipe_prompt, build_weekly_prompt};
use crate::planner::response::{parse_recipe, parse_weekly_plan};

/// Send the prompt once and return the raw text.
async fn request_text(
    client: &dyn AiClient,
    prompt: GenerationPrompt,
    operation: Operation,
) -> Result<Option<String>> {
    tracing::debug!(
        provider = client.provider_name(),
        operation = %operation,
        prompt_len = prompt.text.len(),
        "Requesting generation"
    );

    client
        .generate_text(TextRequest {
            context: operation.to_string(),
            prompt: prompt.text,
            schema: prompt.schema,
        })
        .await
        .map_err(|source| {
            tracing::error!(operation = %operation, error = %source, "AI call failed");
            DinnerError::GenerationFailed { operation, source }
        })
}

fn ensure_diners(diners: &[Diner]) -> Result<()> {
    if diners.is_empty() {
        return Err(DinnerError::NoDiners);
    }
    Ok(())
}

/// Generate one recipe for the given dinner type and diners.
///
/// The result gets a fresh id, the dinner type's id and `source = ai`.
pub async fn generate_recipe(
    client: &dyn AiClient,
    dinner_type: &DinnerType,
    diners: &[Diner],
) -> Result<Recipe> {
    ensure_diners(diners)?;

    let prompt = build_recipe_prompt(dinner_type, diners);
    let raw = request_text(client, prompt, Operation::Recipe).await?;
    let draft = parse_recipe(raw.as_deref())?;

    let recipe = Recipe::from_draft(draft, dinner_type.id, RecipeSource::Ai);
    tracing::info!(id = %recipe.id, name = %recipe.name, "Generated recipe");
    Ok(recipe)
}

/// Generate a Monday-to-Sunday plan.
///
/// `dinner_types` must hold exactly 7 entries; anything else is rejected
/// before the model is called. Recipe `i` is tagged with `dinner_types[i]`.
pub async fn generate_weekly_plan(
    client: &dyn AiClient,
    dinner_types: &[&DinnerType],
    diners: &[Diner],
) -> Result<WeeklyPlan> {
    ensure_diners(diners)?;

    let prompt = build_weekly_prompt(dinner_types, diners)?;
    let raw = request_text(client, prompt, Operation::WeeklyPlan).await?;
    let generated = parse_weekly_plan(raw.as_deref())?;

    let weekly_recipes: Vec<Recipe> = generated
        .weekly_recipes
        .into_iter()
        .zip(dinner_types)
        .map(|(draft, dinner_type)| Recipe::from_draft(draft, dinner_type.id, RecipeSource::Ai))
        .collect();
    debug_assert_eq!(weekly_recipes.len(), DAYS_PER_WEEK);

    let shopping_list = generated
        .shopping_list
        .into_iter()
        .map(|item| ShoppingListItem {
            category: item.category_or_default().to_string(),
            ..item
        })
        .collect();

    tracing::info!(recipes = weekly_recipes.len(), "Generated weekly plan");
    Ok(WeeklyPlan {
        weekly_recipes,
        shopping_list,
    })
}
