use dialoguer::{Confirm, Input, Select};

use crate::error::{DinnerError, Result};
use crate::models::{
    DAYS_PER_WEEK, DinerList, DinnerType, MAX_RATING, RecipeDraft, RecipeIngredient,
    WEEKDAY_NAMES,
};
use crate::planner::constants::{DEFAULT_DINNER_TYPE, DINNER_TYPES, EATER_PROFILES};
use crate::planner::portions::{format_multiplier, total_multiplier};

fn dinner_type_options() -> Vec<String> {
    DINNER_TYPES
        .iter()
        .map(|t| format!("{} - {}", t.title, t.objective))
        .collect()
}

fn default_type_index() -> usize {
    DINNER_TYPES
        .iter()
        .position(|t| t.id == DEFAULT_DINNER_TYPE)
        .unwrap_or(0)
}

/// Pick the type of dinner to generate.
pub fn prompt_dinner_type() -> Result<&'static DinnerType> {
    let selection = Select::new()
        .with_prompt("What kind of dinner are you after?")
        .items(&dinner_type_options())
        .default(default_type_index())
        .interact()?;

    Ok(&DINNER_TYPES[selection])
}

/// Pick a dinner type for each day, Monday first.
pub fn prompt_weekly_types() -> Result<Vec<&'static DinnerType>> {
    let options = dinner_type_options();
    let mut types = Vec::with_capacity(DAYS_PER_WEEK);

    for day in WEEKDAY_NAMES {
        let selection = Select::new()
            .with_prompt(format!("Dinner type for {}", day))
            .items(&options)
            .default(default_type_index())
            .interact()?;
        types.push(&DINNER_TYPES[selection]);
    }

    Ok(types)
}

fn appetite_options() -> Vec<String> {
    EATER_PROFILES
        .iter()
        .map(|p| format!("{} {} (x{}) - {}", p.icon, p.name, p.multiplier, p.description))
        .collect()
}

fn prompt_appetite(prompt: &str) -> Result<&'static str> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&appetite_options())
        .default(1)
        .interact()?;
    Ok(EATER_PROFILES[selection].id)
}

/// Build the diner list interactively.
pub fn prompt_diners() -> Result<DinerList> {
    let mut diners = DinerList::new();

    loop {
        println!();
        for (i, diner) in diners.as_slice().iter().enumerate() {
            println!("  Person {}: {}", i + 1, diner.appetite);
        }
        println!(
            "  Total: {} people, equivalent to {} standard servings",
            diners.len(),
            format_multiplier(total_multiplier(diners.as_slice()))
        );

        let mut actions = vec!["Done", "Add a person", "Change a person's appetite"];
        if diners.len() > 1 {
            actions.push("Remove a person");
        }

        let action = Select::new()
            .with_prompt("Who is having dinner?")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => break,
            1 => {
                let id = diners.add();
                let appetite = prompt_appetite("Appetite of the new person")?;
                diners.set_appetite(id, appetite)?;
            }
            2 | 3 => {
                let people: Vec<String> = (1..=diners.len()).map(|i| format!("Person {}", i)).collect();
                let index = Select::new()
                    .with_prompt("Which person?")
                    .items(&people)
                    .default(0)
                    .interact()?;
                let id = diners.as_slice()[index].id;

                if action == 2 {
                    let appetite = prompt_appetite("New appetite")?;
                    diners.set_appetite(id, appetite)?;
                } else {
                    diners.remove(id)?;
                }
            }
            _ => {}
        }
    }

    Ok(diners)
}

/// Ask for a star rating. `None` means the user skipped.
pub fn prompt_rating(recipe_name: &str) -> Result<Option<f64>> {
    let steps: Vec<f64> = (1..=(MAX_RATING * 2.0) as u32).map(|s| s as f64 / 2.0).collect();
    let mut options = vec!["Skip".to_string()];
    options.extend(steps.iter().map(|r| format!("{:.1} stars", r)));

    let selection = Select::new()
        .with_prompt(format!("Rate '{}'", recipe_name))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(selection.checked_sub(1).map(|i| steps[i]))
}

/// Parse a `quantity | name` line. A row with both parts blank is skipped.
fn parse_ingredient_line(line: &str) -> Result<Option<RecipeIngredient>> {
    let (quantity, name) = line.split_once('|').ok_or_else(|| {
        DinnerError::InvalidInput("Use 'quantity | ingredient', e.g. '150g | Rice'".to_string())
    })?;
    let (quantity, name) = (quantity.trim(), name.trim());
    if quantity.is_empty() && name.is_empty() {
        return Ok(None);
    }
    if name.is_empty() {
        return Err(DinnerError::InvalidInput("Ingredient name is empty".to_string()));
    }
    Ok(Some(RecipeIngredient::new(quantity, name)))
}

/// Accepts an empty line (ends the list) or a parseable ingredient.
fn check_ingredient_line(line: &str) -> std::result::Result<(), String> {
    if line.trim().is_empty() {
        return Ok(());
    }
    parse_ingredient_line(line)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn accept_any_line(_: &str) -> std::result::Result<(), String> {
    Ok(())
}

/// Read lines until an empty one. Each line is checked as it is typed, so
/// a bad line is asked for again instead of failing the whole form.
fn read_lines(
    prompt: &str,
    check: fn(&str) -> std::result::Result<(), String>,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (Enter to finish)", prompt))
            .allow_empty(true)
            .validate_with(move |input: &String| check(input))
            .interact_text()?;
        let input = input.trim();
        if input.is_empty() {
            break;
        }
        lines.push(input.to_string());
    }
    Ok(lines)
}

/// Show the current entries and ask whether to replace them.
fn keep_existing<T: std::fmt::Display>(existing: &[T]) -> Result<bool> {
    if existing.is_empty() {
        return Ok(false);
    }
    for (i, line) in existing.iter().enumerate() {
        println!("  {}. {}", i + 1, line);
    }
    Ok(!prompt_yes_no("Replace these?", false)?)
}

fn prompt_ingredients(existing: &[RecipeIngredient]) -> Result<Vec<RecipeIngredient>> {
    let shown: Vec<String> = existing
        .iter()
        .map(|i| format!("{} | {}", i.quantity, i.name))
        .collect();
    if keep_existing(&shown)? {
        return Ok(existing.to_vec());
    }

    let mut ingredients = Vec::new();
    for line in read_lines("Ingredient as 'quantity | name'", check_ingredient_line)? {
        if let Some(ingredient) = parse_ingredient_line(&line)? {
            ingredients.push(ingredient);
        }
    }
    Ok(ingredients)
}

fn prompt_steps(existing: &[String]) -> Result<Vec<String>> {
    if keep_existing(existing)? {
        return Ok(existing.to_vec());
    }
    read_lines("Step", accept_any_line)
}

/// Recipe form, pre-filled when editing.
pub fn prompt_recipe_form(initial: Option<&RecipeDraft>) -> Result<RecipeDraft> {
    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(initial.map(|d| d.name.clone()).unwrap_or_default())
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(initial.map(|d| d.description.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let prep_time: i64 = Input::new()
        .with_prompt("Preparation time (minutes)")
        .default(initial.map(|d| d.prep_time).unwrap_or(30))
        .validate_with(|v: &i64| if *v >= 0 { Ok(()) } else { Err("Must be 0 or more") })
        .interact_text()?;

    let cost_per_person: f64 = Input::new()
        .with_prompt("Cost per person")
        .default(initial.map(|d| d.cost_per_person).unwrap_or(0.0))
        .validate_with(|v: &f64| {
            if v.is_finite() && *v >= 0.0 {
                Ok(())
            } else {
                Err("Must be 0 or more")
            }
        })
        .interact_text()?;

    let ingredients = prompt_ingredients(initial.map(|d| d.ingredients.as_slice()).unwrap_or(&[]))?;
    let instructions = prompt_steps(initial.map(|d| d.instructions.as_slice()).unwrap_or(&[]))?;

    Ok(RecipeDraft {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        prep_time,
        cost_per_person,
        ingredients,
        instructions,
    })
}

/// Ask how an image should be changed.
pub fn prompt_edit_instruction() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("How should the image change? (e.g. 'add a basil garnish')")
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
