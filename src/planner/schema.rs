//! Structured-output schemas sent along with generation prompts.
//!
//! Written in the `responseSchema` dialect (upper-case OpenAPI types).

use serde_json::{Value, json};

use crate::planner::constants::{CURRENCY_SYMBOL, MAX_COST_PER_PERSON, MAX_PREP_TIME_MINUTES};

/// Schema of a single recipe.
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Creative, appetising name of the dish."
            },
            "description": {
                "type": "STRING",
                "description": "Short, attractive description of the dish."
            },
            "prepTime": {
                "type": "INTEGER",
                "description": format!(
                    "Total preparation time in minutes ({} or less).",
                    MAX_PREP_TIME_MINUTES
                )
            },
            "costPerPerson": {
                "type": "NUMBER",
                "description": format!(
                    "Estimated cost in {} for one standard serving. MUST be below {}.",
                    CURRENCY_SYMBOL, MAX_COST_PER_PERSON
                )
            },
            "ingredients": {
                "type": "ARRAY",
                "description": "Ingredients for the recipe. Quantities MUST already be scaled for the whole group of diners.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "quantity": {
                            "type": "STRING",
                            "description": "Amount with unit (e.g. '100g', '1/2 unit')."
                        },
                        "name": {
                            "type": "STRING",
                            "description": "Ingredient name."
                        }
                    },
                    "required": ["quantity", "name"]
                }
            },
            "instructions": {
                "type": "ARRAY",
                "description": "Step-by-step preparation instructions.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["name", "description", "prepTime", "costPerPerson", "ingredients", "instructions"]
    })
}

/// Schema of a seven-day plan plus its consolidated shopping list.
pub fn weekly_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "weeklyRecipes": {
                "type": "ARRAY",
                "description": "Exactly 7 dinner recipes, one per day from Monday to Sunday. Quantities scaled for the whole group.",
                "minItems": 7,
                "maxItems": 7,
                "items": recipe_schema()
            },
            "shoppingList": {
                "type": "ARRAY",
                "description": "Consolidated, categorised shopping list covering all 7 recipes, with total quantities for the whole group over the week.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "Ingredient name."
                        },
                        "quantity": {
                            "type": "STRING",
                            "description": "Total quantity for the week (e.g. '500g', '3 units')."
                        },
                        "category": {
                            "type": "STRING",
                            "description": "Shop section (e.g. 'Vegetables', 'Butcher', 'Fishmonger', 'Dairy & Eggs', 'Pantry')."
                        }
                    },
                    "required": ["name", "quantity", "category"]
                }
            }
        },
        "required": ["weeklyRecipes", "shoppingList"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_schema_requires_every_field() {
        let schema = recipe_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        for field in ["name", "description", "prepTime", "costPerPerson", "ingredients", "instructions"] {
            assert!(required.contains(&field), "{field} not required");
        }
        assert_eq!(schema["properties"]["prepTime"]["type"], "INTEGER");
    }

    #[test]
    fn test_weekly_schema_nests_recipe_schema() {
        let schema = weekly_plan_schema();
        assert_eq!(schema["properties"]["weeklyRecipes"]["items"], recipe_schema());
        assert_eq!(schema["properties"]["weeklyRecipes"]["minItems"], 7);
    }
}
