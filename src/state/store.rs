use std::path::{Path, PathBuf};

use strsim::jaro_winkler;

use crate::error::{DinnerError, Result};
use crate::models::{DinnerTypeId, Recipe, RecipeDraft, RecipeSource, is_valid_rating};
use crate::planner::constants::RATING_KEEP_THRESHOLD;
use crate::state::persistence::{load_recipes, save_recipes};

/// Minimum similarity for a fuzzy name match.
const NAME_MATCH_THRESHOLD: f64 = 0.8;

/// What a rating did to the saved collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOutcome {
    /// Newly added to the collection.
    Saved,
    /// Already stored; rating updated in place.
    Updated,
    /// AI recipe rated too low and dropped.
    Removed,
    /// Not stored and not good enough to keep.
    Ignored,
}

/// The user's saved recipes, backed by one JSON file.
///
/// Loaded once; every mutation rewrites the whole file.
#[derive(Debug)]
pub struct RecipeStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Open the store at `path`. Missing or corrupt data starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let recipes = load_recipes(&path);
        tracing::debug!(path = %path.display(), count = recipes.len(), "Opened recipe store");
        Self { path, recipes }
    }

    /// Write `recipes` to disk, then adopt them. A failed write leaves
    /// memory untouched.
    fn commit(&mut self, recipes: Vec<Recipe>) -> Result<()> {
        save_recipes(&self.path, &recipes)?;
        self.recipes = recipes;
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DinnerError::RecipeNotFound(id.to_string()))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Find a recipe by full id or unique id prefix.
    pub fn find(&self, id_or_prefix: &str) -> Result<&Recipe> {
        if let Some(recipe) = self.get(id_or_prefix) {
            return Ok(recipe);
        }

        let needle = id_or_prefix.trim();
        let mut matches = self
            .recipes
            .iter()
            .filter(|r| !needle.is_empty() && r.id.starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(recipe), None) => Ok(recipe),
            (Some(_), Some(_)) => Err(DinnerError::InvalidInput(format!(
                "Recipe id prefix '{}' is ambiguous",
                id_or_prefix
            ))),
            _ => Err(DinnerError::RecipeNotFound(id_or_prefix.to_string())),
        }
    }

    /// Recipes whose name resembles `query`, best match first.
    pub fn search_by_name(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        let mut scored: Vec<(&Recipe, f64)> = self
            .recipes
            .iter()
            .map(|r| {
                let name = r.name.to_lowercase();
                let score = if name.contains(&query) {
                    1.0
                } else {
                    jaro_winkler(&name, &query)
                };
                (r, score)
            })
            .filter(|(_, score)| *score >= NAME_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(r, _)| r).collect()
    }

    /// Rate a recipe and keep the collection in line with the rating.
    ///
    /// Above the threshold the recipe is saved or updated. At or below it,
    /// a stored AI recipe is removed, a stored user recipe is only updated,
    /// and an unsaved recipe is left alone.
    pub fn rate(&mut self, recipe: &Recipe, rating: f64) -> Result<RateOutcome> {
        if !is_valid_rating(rating) {
            return Err(DinnerError::InvalidRating(rating));
        }

        let mut rated = recipe.clone();
        rated.rating = Some(rating);
        let existing = self.recipes.iter().position(|r| r.id == rated.id);
        let mut recipes = self.recipes.clone();

        let outcome = match (existing, rating > RATING_KEEP_THRESHOLD) {
            (Some(index), true) => {
                recipes[index] = rated;
                RateOutcome::Updated
            }
            (None, true) => {
                recipes.push(rated);
                RateOutcome::Saved
            }
            (Some(index), false) if recipes[index].source == RecipeSource::User => {
                recipes[index] = rated;
                RateOutcome::Updated
            }
            (Some(index), false) => {
                recipes.remove(index);
                RateOutcome::Removed
            }
            (None, false) => RateOutcome::Ignored,
        };

        if outcome != RateOutcome::Ignored {
            self.commit(recipes)?;
        }
        tracing::info!(id = %recipe.id, rating = rating, outcome = ?outcome, "Rated recipe");
        Ok(outcome)
    }

    /// Save a recipe written by the user. Returns its new id.
    pub fn save_user_recipe(&mut self, draft: RecipeDraft) -> Result<String> {
        let recipe = Recipe::from_draft(draft, DinnerTypeId::Custom, RecipeSource::User);
        let id = recipe.id.clone();
        let mut recipes = self.recipes.clone();
        recipes.push(recipe);
        self.commit(recipes)?;
        Ok(id)
    }

    /// Replace a stored recipe's content, keeping its id, type, source and rating.
    pub fn update_recipe(&mut self, id: &str, draft: RecipeDraft) -> Result<()> {
        let index = self.position(id)?;
        let mut recipes = self.recipes.clone();
        recipes[index].apply_draft(draft);
        self.commit(recipes)
    }

    /// Remove a recipe, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Recipe> {
        let index = self.position(id)?;
        let mut recipes = self.recipes.clone();
        let removed = recipes.remove(index);
        self.commit(recipes)?;
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeIngredient;
    use tempfile::TempDir;

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            description: "Tasty".to_string(),
            prep_time: 15,
            cost_per_person: 2.0,
            ingredients: vec![RecipeIngredient::new("100g", "Rice")],
            instructions: vec!["Cook".to_string()],
        }
    }

    fn ai_recipe(name: &str) -> Recipe {
        Recipe::from_draft(draft(name), DinnerTypeId::Energetic, RecipeSource::Ai)
    }

    fn open_temp() -> (TempDir, RecipeStore) {
        let dir = TempDir::new().unwrap();
        let store = RecipeStore::open(dir.path().join("recipes.json"));
        (dir, store)
    }

    #[test]
    fn test_rate_above_threshold_saves_then_updates() {
        let (_dir, mut store) = open_temp();
        let recipe = ai_recipe("Rice bowl");

        assert_eq!(store.rate(&recipe, 4.0).unwrap(), RateOutcome::Saved);
        assert_eq!(store.rate(&recipe, 3.0).unwrap(), RateOutcome::Updated);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&recipe.id).unwrap().rating, Some(3.0));
    }

    #[test]
    fn test_low_rating_removes_stored_ai_recipe() {
        let (_dir, mut store) = open_temp();
        let recipe = ai_recipe("Rice bowl");
        store.rate(&recipe, 5.0).unwrap();

        assert_eq!(store.rate(&recipe, 2.5).unwrap(), RateOutcome::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_low_rating_on_unsaved_recipe_is_ignored() {
        let (dir, mut store) = open_temp();
        let recipe = ai_recipe("Rice bowl");
        assert_eq!(store.rate(&recipe, 1.0).unwrap(), RateOutcome::Ignored);
        assert!(store.is_empty());
        assert!(!dir.path().join("recipes.json").exists());
    }

    #[test]
    fn test_user_recipe_is_never_removed_by_rating() {
        let (_dir, mut store) = open_temp();
        let id = store.save_user_recipe(draft("Grandma's soup")).unwrap();
        let recipe = store.get(&id).unwrap().clone();

        assert_eq!(store.rate(&recipe, 0.5).unwrap(), RateOutcome::Updated);
        assert_eq!(store.get(&id).unwrap().rating, Some(0.5));
        assert_eq!(store.get(&id).unwrap().source, RecipeSource::User);
        assert_eq!(store.get(&id).unwrap().dinner_type, DinnerTypeId::Custom);
    }

    #[test]
    fn test_invalid_rating_rejected() {
        let (_dir, mut store) = open_temp();
        let recipe = ai_recipe("Rice bowl");
        assert!(matches!(
            store.rate(&recipe, 4.2),
            Err(DinnerError::InvalidRating(_))
        ));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (dir, mut store) = open_temp();
        let id = store.save_user_recipe(draft("Pasta")).unwrap();
        store.update_recipe(&id, draft("Pasta al pesto")).unwrap();

        let reopened = RecipeStore::open(dir.path().join("recipes.json"));
        assert_eq!(reopened.recipes(), store.recipes());
        assert_eq!(reopened.get(&id).unwrap().name, "Pasta al pesto");

        store.delete(&id).unwrap();
        let reopened = RecipeStore::open(dir.path().join("recipes.json"));
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        // The parent directory does not exist, so every write fails
        let mut store = RecipeStore::open(dir.path().join("missing").join("recipes.json"));
        let recipe = ai_recipe("Rice bowl");

        assert!(matches!(store.rate(&recipe, 4.0), Err(DinnerError::Io(_))));
        assert!(store.is_empty());
        assert!(store.save_user_recipe(draft("Pasta")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_delete_keeps_recipe() {
        let (dir, mut store) = open_temp();
        let id = store.save_user_recipe(draft("Pasta")).unwrap();

        // Replace the file with a directory so the rewrite fails
        let path = dir.path().join("recipes.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.delete(&id).is_err());
        assert!(store.get(&id).is_some());
        assert!(store.update_recipe(&id, draft("Pasta al pesto")).is_err());
        assert_eq!(store.get(&id).unwrap().name, "Pasta");
    }

    #[test]
    fn test_find_by_prefix() {
        let (_dir, mut store) = open_temp();
        let id = store.save_user_recipe(draft("Pasta")).unwrap();
        assert_eq!(store.find(&id[..8]).unwrap().id, id);
        assert!(matches!(
            store.find("zzzzzzzz-nope"),
            Err(DinnerError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn test_search_by_name() {
        let (_dir, mut store) = open_temp();
        store.save_user_recipe(draft("Chickpea curry")).unwrap();
        store.save_user_recipe(draft("Lemon chicken")).unwrap();

        let found = store.search_by_name("chickpea");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chickpea curry");
        assert!(store.search_by_name("zzzz").is_empty());
    }
}
