use dinner_ai_rs::models::{DinnerTypeId, Recipe, RecipeDraft, RecipeIngredient, RecipeSource};
use dinner_ai_rs::state::{RateOutcome, RecipeStore, backup_path};
use tempfile::TempDir;

fn ai_recipe(name: &str) -> Recipe {
    Recipe::from_draft(
        RecipeDraft {
            name: name.to_string(),
            description: "Weeknight dinner".to_string(),
            prep_time: 25,
            cost_per_person: 2.8,
            ingredients: vec![RecipeIngredient::new("200g", "Chickpeas")],
            instructions: vec!["Simmer.".to_string()],
        },
        DinnerTypeId::MuscleRecovery,
        RecipeSource::Ai,
    )
}

#[test]
fn test_saved_recipes_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");

    let recipe = ai_recipe("Chickpea stew");
    {
        let mut store = RecipeStore::open(&path);
        assert_eq!(store.rate(&recipe, 4.0).unwrap(), RateOutcome::Saved);
    }

    let store = RecipeStore::open(&path);
    let stored = store.get(&recipe.id).unwrap();
    assert_eq!(stored.rating, Some(4.0));
    assert_eq!(stored.dinner_type, DinnerTypeId::MuscleRecovery);
    assert_eq!(stored.source, RecipeSource::Ai);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"prepTime\""));
    assert!(raw.contains("\"type\": \"muscle-recovery\""));
}

#[test]
fn test_threshold_is_exclusive() {
    let dir = TempDir::new().unwrap();
    let mut store = RecipeStore::open(dir.path().join("recipes.json"));
    let recipe = ai_recipe("Borderline salad");

    assert_eq!(store.rate(&recipe, 2.5).unwrap(), RateOutcome::Ignored);
    assert!(store.is_empty());

    assert_eq!(store.rate(&recipe, 3.0).unwrap(), RateOutcome::Saved);
    assert_eq!(store.rate(&recipe, 2.5).unwrap(), RateOutcome::Removed);
    assert!(store.is_empty());
}

#[test]
fn test_user_recipe_lifecycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    let mut store = RecipeStore::open(&path);

    let id = store.save_user_recipe(ai_recipe("Gran's lentils").to_draft()).unwrap();
    let saved = store.get(&id).unwrap().clone();
    assert_eq!(saved.source, RecipeSource::User);
    assert_eq!(saved.dinner_type, DinnerTypeId::Custom);

    assert_eq!(store.rate(&saved, 1.0).unwrap(), RateOutcome::Updated);
    assert_eq!(store.get(&id).unwrap().rating, Some(1.0));

    let mut draft = saved.to_draft();
    draft.name = "Gran's red lentils".to_string();
    store.update_recipe(&id, draft).unwrap();

    let reopened = RecipeStore::open(&path);
    let updated = reopened.get(&id).unwrap();
    assert_eq!(updated.name, "Gran's red lentils");
    assert_eq!(updated.rating, Some(1.0));

    let mut store = reopened;
    store.delete(&id).unwrap();
    assert!(RecipeStore::open(&path).is_empty());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, "{ this is not a recipe list").unwrap();

    let mut store = RecipeStore::open(&path);
    assert!(store.is_empty());

    // The next save starts a fresh file; the bad data stays in the backup
    store.rate(&ai_recipe("Fresh start"), 5.0).unwrap();
    assert_eq!(RecipeStore::open(&path).len(), 1);
    assert_eq!(
        std::fs::read_to_string(backup_path(&path)).unwrap(),
        "{ this is not a recipe list"
    );
}
