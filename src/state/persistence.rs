use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Recipe;

/// Where a corrupt store file is moved aside, e.g. `recipes.json.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Load the saved recipe collection.
///
/// A missing or unreadable file yields an empty collection; the problem is
/// logged and never fatal. A file that does not parse is renamed to its
/// [`backup_path`] first so the next save cannot destroy it.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Vec<Recipe> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No recipe store yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read recipe store");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&content) {
        Ok(recipes) => recipes,
        Err(e) => {
            let backup = backup_path(path);
            match fs::rename(path, &backup) {
                Ok(()) => tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Recipe store is corrupt, moved aside and starting empty"
                ),
                Err(rename_err) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    rename_error = %rename_err,
                    "Recipe store is corrupt and could not be moved aside, starting empty"
                ),
            }
            Vec::new()
        }
    }
}

/// Rewrite the whole collection.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(recipes)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = recipes.len(), "Saved recipe store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DinnerTypeId, RecipeIngredient, RecipeSource};
    use tempfile::NamedTempFile;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "3f1c".to_string(),
            rating: Some(4.5),
            name: "Leek tortilla".to_string(),
            description: "Soft and golden".to_string(),
            prep_time: 20,
            cost_per_person: 1.4,
            ingredients: vec![RecipeIngredient::new("2", "Eggs")],
            instructions: vec!["Beat eggs.".to_string(), "Cook.".to_string()],
            dinner_type: DinnerTypeId::Light,
            source: RecipeSource::Ai,
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let recipes = vec![sample_recipe()];

        save_recipes(file.path(), &recipes).unwrap();
        let reloaded = load_recipes(file.path());
        assert_eq!(reloaded, recipes);
    }

    #[test]
    fn test_corrupt_file_loads_empty_and_is_kept_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, b"[{\"id\": ").unwrap();

        assert!(load_recipes(&path).is_empty());
        assert!(!path.exists());
        let backup = backup_path(&path);
        assert_eq!(backup, dir.path().join("recipes.json.bak"));
        assert_eq!(std::fs::read(&backup).unwrap(), b"[{\"id\": ");
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_recipes(dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_stored_keys_are_camel_case() {
        let file = NamedTempFile::new().unwrap();
        save_recipes(file.path(), &[sample_recipe()]).unwrap();
        let raw = std::fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("\"prepTime\""));
        assert!(raw.contains("\"costPerPerson\""));
        assert!(raw.contains("\"type\": \"light\""));
        assert!(raw.contains("\"source\": \"ai\""));
    }
}
