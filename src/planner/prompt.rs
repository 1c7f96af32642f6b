//! Natural-language prompts for recipe and weekly-plan generation.

use std::fmt::Write;

use serde_json::Value;

use crate::error::{DinnerError, Result};
use crate::models::{DAYS_PER_WEEK, Diner, DinnerType, WEEKDAY_NAMES};
use crate::planner::constants::{
    CURRENCY_SYMBOL, GENERAL_PRINCIPLES, MAX_COST_PER_PERSON, MAX_PREP_TIME_MINUTES,
};
use crate::planner::portions::{DinerSummary, format_multiplier, summarize_diners};
use crate::planner::schema::{recipe_schema, weekly_plan_schema};

const JSON_ONLY: &str = "Respond with ONLY a single JSON object matching the provided schema. \
Do not include any text, explanation or markdown code fences outside the JSON object.";

/// A prompt and the schema its answer must follow.
#[derive(Debug, Clone)]
pub struct GenerationPrompt {
    pub text: String,
    pub schema: Value,
}

fn diners_section(out: &mut String, summary: &DinerSummary) {
    let factor = format_multiplier(summary.total_multiplier);
    let _ = writeln!(out, "**DINERS (VERY IMPORTANT):**");
    let _ = writeln!(out, "- Total number of people: {}", summary.headcount);
    let _ = writeln!(out, "- Composition: {}", summary.composition);
    let _ = writeln!(
        out,
        "- **Total serving factor (equivalent standard people): {}**",
        factor
    );
    out.push('\n');
}

/// Preferred-ingredient instructions. Empty when the type has no preference.
pub fn ingredients_section(dinner_type: &DinnerType) -> String {
    if !dinner_type.has_preferred_ingredients() {
        return String::new();
    }

    let list = dinner_type.preferred_ingredients.join(", ");

    if dinner_type.ingredients_are_optional() {
        return format!(
            "**Budget ingredient inspiration:**\n\
             - For this special dinner, draw inspiration from these ingredients to keep the cost reasonable \
             without sacrificing flavour: {}. You are free to deviate and add other ingredients that lift the dish.\n",
            list
        );
    }

    format!(
        "**Preferred ingredients (VERY IMPORTANT):**\n\
         - The recipe MUST be based PRIMARILY on ingredients from this list, since they are cheap, \
         affordable and familiar: **{}**.\n\
         - You may add complementary staples (oil, salt, spices, etc.) as needed, but the core of the \
         dish must come from the list.\n",
        list
    )
}

fn scaling_rule(factor: &str) -> String {
    format!(
        "- **Ingredient quantities: ALL quantities must be scaled by EXACTLY the total serving factor of {factor}.** \
         The base recipe is for 1 standard person; multiply every base quantity by {factor}."
    )
}

fn cost_and_time_rules(out: &mut String, per: &str) {
    let _ = writeln!(
        out,
        "- Preparation time: at most {} minutes{}.",
        MAX_PREP_TIME_MINUTES, per
    );
    let _ = writeln!(
        out,
        "- Cost: the cost per standard person{} MUST be below {} {}.",
        per, MAX_COST_PER_PERSON, CURRENCY_SYMBOL
    );
}

/// Prompt for one dinner.
pub fn build_recipe_prompt(dinner_type: &DinnerType, diners: &[Diner]) -> GenerationPrompt {
    let summary = summarize_diners(diners);
    let factor = format_multiplier(summary.total_multiplier);
    let mut out = String::new();

    out.push_str("Please generate one dinner recipe that meets the following criteria.\n\n");
    let _ = writeln!(out, "Dinner type: \"{}\"", dinner_type.title);
    let _ = writeln!(out, "Objective: \"{}\"\n", dinner_type.objective);

    diners_section(&mut out, &summary);

    let ingredients = ingredients_section(dinner_type);
    if !ingredients.is_empty() {
        out.push_str(&ingredients);
        out.push('\n');
    }

    out.push_str("The recipe MUST meet these STRICT constraints:\n");
    let _ = writeln!(out, "{}", scaling_rule(&factor));
    cost_and_time_rules(&mut out, "");
    out.push_str("- Flavour: the recipe must be delicious and appetising.\n");
    out.push_str("- Creativity: avoid always suggesting the same dishes; look for original, tasty options.\n\n");

    out.push_str("Use these nutritional guidelines as inspiration:\n");
    let _ = writeln!(out, "Specific guidelines for \"{}\":", dinner_type.title);
    let _ = writeln!(out, "{}\n", dinner_type.guidelines);
    out.push_str("General principles for an ideal dinner:\n");
    out.push_str(GENERAL_PRINCIPLES);
    out.push('\n');
    out.push_str(JSON_ONLY);

    GenerationPrompt {
        text: out,
        schema: recipe_schema(),
    }
}

fn day_block(out: &mut String, day: &str, dinner_type: &DinnerType) {
    out.push_str("---\n");
    let _ = writeln!(out, "**Day: {}**", day);
    let _ = writeln!(out, "- Dinner type: \"{}\"", dinner_type.title);
    let _ = writeln!(out, "- Objective: \"{}\"", dinner_type.objective);
    out.push_str(&ingredients_section(dinner_type));
    let _ = writeln!(out, "- Specific guidelines:\n{}", dinner_type.guidelines);
    out.push_str("---\n\n");
}

/// Prompt for a Monday-to-Sunday plan. `dinner_types` must hold exactly 7 entries.
pub fn build_weekly_prompt(
    dinner_types: &[&DinnerType],
    diners: &[Diner],
) -> Result<GenerationPrompt> {
    if dinner_types.len() != DAYS_PER_WEEK {
        return Err(DinnerError::InvalidPlanLength(dinner_types.len()));
    }

    let summary = summarize_diners(diners);
    let factor = format_multiplier(summary.total_multiplier);
    let mut out = String::new();

    out.push_str(
        "Please generate a dinner plan for a full week (7 days) and a consolidated shopping list, \
         following the specific objectives for EACH DAY.\n\n",
    );

    diners_section(&mut out, &summary);

    out.push_str("**DAILY OBJECTIVES:**\n");
    for (day, dinner_type) in WEEKDAY_NAMES.iter().zip(dinner_types) {
        day_block(&mut out, day, dinner_type);
    }

    out.push_str("The plan MUST meet these STRICT constraints for EVERY recipe:\n");
    let _ = writeln!(
        out,
        "{} This applies to the daily recipes and to the final shopping list.",
        scaling_rule(&factor)
    );
    out.push_str(
        "- Shopping list: it MUST be CONSOLIDATED, the sum of the ingredients of all 7 already-scaled \
         recipes, each item with a category.\n",
    );
    out.push_str("- Variety: the 7 recipes must all be different dishes; no dish may repeat across the week.\n");
    cost_and_time_rules(&mut out, " per dinner");
    out.push_str("- Flavour: every recipe must be delicious.\n\n");

    out.push_str("Also use these general principles for an ideal dinner as a guide:\n");
    out.push_str(GENERAL_PRINCIPLES);
    out.push('\n');
    out.push_str(
        "The JSON object must contain 'weeklyRecipes' (7 recipes in day order) and 'shoppingList'. ",
    );
    out.push_str(JSON_ONLY);

    Ok(GenerationPrompt {
        text: out,
        schema: weekly_plan_schema(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DinnerTypeId;
    use crate::planner::constants::dinner_type;

    fn diners() -> Vec<Diner> {
        vec![
            Diner::new(1, "humano"),
            Diner::new(2, "humano"),
            Diner::new(3, "bestia-parda"),
        ]
    }

    fn light() -> &'static DinnerType {
        dinner_type(DinnerTypeId::Light).unwrap()
    }

    fn social() -> &'static DinnerType {
        dinner_type(DinnerTypeId::Social).unwrap()
    }

    #[test]
    fn test_recipe_prompt_states_factor_and_limits() {
        let prompt = build_recipe_prompt(light(), &diners());
        assert!(prompt.text.contains("Total serving factor (equivalent standard people): 3.50"));
        assert!(prompt.text.contains("multiply every base quantity by 3.50"));
        assert!(prompt.text.contains("at most 30 minutes"));
        assert!(prompt.text.contains("MUST be below 3"));
        assert!(prompt.text.contains("2 Humano (x1), 1 Bestia Parda (x1.5)"));
        assert!(prompt.text.contains(light().guidelines));
        assert!(prompt.text.contains("Nutritional balance"));
        assert!(prompt.text.contains("ONLY a single JSON object"));
        assert_eq!(prompt.schema, recipe_schema());
    }

    #[test]
    fn test_preferred_ingredients_required_for_regular_types() {
        let section = ingredients_section(light());
        assert!(section.contains("MUST be based PRIMARILY"));
        assert!(section.contains("Potato, Carrot"));
        assert!(section.contains("oil, salt, spices"));
    }

    #[test]
    fn test_preferred_ingredients_optional_for_social() {
        let section = ingredients_section(social());
        assert!(section.contains("inspiration"));
        assert!(section.contains("free to deviate"));
        assert!(!section.contains("PRIMARILY"));
    }

    #[test]
    fn test_no_preferred_ingredients_no_section() {
        let bare = DinnerType {
            preferred_ingredients: &[],
            ..light().clone()
        };
        assert!(ingredients_section(&bare).is_empty());
    }

    #[test]
    fn test_weekly_prompt_has_one_block_per_day_in_order() {
        let mut types = vec![light(); DAYS_PER_WEEK];
        types[6] = social();
        let prompt = build_weekly_prompt(&types, &diners()).unwrap();

        let mut last = 0;
        for day in WEEKDAY_NAMES {
            let pos = prompt.text.find(&format!("**Day: {}**", day)).unwrap();
            assert!(pos > last);
            last = pos;
        }
        let sunday = prompt.text.find("**Day: Sunday**").unwrap();
        assert!(prompt.text[sunday..].contains(social().title));
        assert!(prompt.text.contains("CONSOLIDATED"));
        assert!(prompt.text.contains("no dish may repeat"));
        assert_eq!(prompt.schema, weekly_plan_schema());
    }

    #[test]
    fn test_weekly_prompt_rejects_wrong_length() {
        let types = vec![light(); 6];
        assert!(matches!(
            build_weekly_prompt(&types, &diners()),
            Err(DinnerError::InvalidPlanLength(6))
        ));
    }
}
