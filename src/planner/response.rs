//! Decoding and validation of the model's JSON answers.
//!
//! The model is told to answer with bare JSON, but its output is untrusted:
//! fences are stripped, decoding is strict, and the decoded value is checked
//! before anything downstream uses it.

use serde::de::DeserializeOwned;

use crate::error::{DinnerError, Result};
use crate::models::{DAYS_PER_WEEK, GeneratedPlan, RecipeDraft};

/// Remove a surrounding markdown code fence, with or without a language tag.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag (e.g. `json`) on the opening line.
    let body = match rest.find('\n') {
        Some(newline) if rest[..newline].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            &rest[newline + 1..]
        }
        _ => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Decode the model's raw text into `T`.
///
/// `context` names the request in errors and logs.
pub fn parse_model_json<T: DeserializeOwned>(raw: Option<&str>, context: &str) -> Result<T> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        tracing::error!(context = context, "AI response text is empty");
        return Err(DinnerError::EmptyResponse {
            context: context.to_string(),
        });
    }

    let cleaned = strip_code_fence(text);

    serde_json::from_str(cleaned).map_err(|source| {
        tracing::error!(
            context = context,
            raw = cleaned,
            error = %source,
            "Failed to parse AI response"
        );
        DinnerError::MalformedResponse {
            context: context.to_string(),
            raw: cleaned.to_string(),
            source,
        }
    })
}

fn incomplete(context: &str, reason: impl Into<String>) -> DinnerError {
    let reason = reason.into();
    tracing::error!(context = context, reason = %reason, "AI response failed validation");
    DinnerError::IncompleteResponse {
        context: context.to_string(),
        reason,
    }
}

/// Reject recipes the rest of the app cannot use.
pub fn validate_recipe(draft: &RecipeDraft, context: &str) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(incomplete(context, "recipe has no name"));
    }
    if draft.prep_time < 0 {
        return Err(incomplete(context, "negative preparation time"));
    }
    if !draft.cost_per_person.is_finite() || draft.cost_per_person < 0.0 {
        return Err(incomplete(context, "invalid cost per person"));
    }
    if draft.ingredients.iter().any(|i| i.name.trim().is_empty()) {
        return Err(incomplete(context, "ingredient without a name"));
    }
    Ok(())
}

/// Check the plan holds one valid recipe per day and a usable shopping list.
pub fn validate_plan(plan: &GeneratedPlan, context: &str) -> Result<()> {
    if plan.weekly_recipes.len() != DAYS_PER_WEEK {
        return Err(incomplete(
            context,
            format!(
                "expected {} recipes, got {}",
                DAYS_PER_WEEK,
                plan.weekly_recipes.len()
            ),
        ));
    }
    for (i, recipe) in plan.weekly_recipes.iter().enumerate() {
        validate_recipe(recipe, &format!("{} day {}", context, i + 1))?;
    }
    if plan.shopping_list.iter().any(|item| item.name.trim().is_empty()) {
        return Err(incomplete(context, "shopping list item without a name"));
    }
    Ok(())
}

/// Parse and validate a single recipe answer.
pub fn parse_recipe(raw: Option<&str>) -> Result<RecipeDraft> {
    let draft: RecipeDraft = parse_model_json(raw, "recipe")?;
    validate_recipe(&draft, "recipe")?;
    Ok(draft)
}

/// Parse and validate a weekly plan answer.
pub fn parse_weekly_plan(raw: Option<&str>) -> Result<GeneratedPlan> {
    let plan: GeneratedPlan = parse_model_json(raw, "weekly plan")?;
    validate_plan(&plan, "weekly plan")?;
    Ok(plan)
}
