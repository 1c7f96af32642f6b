use std::fs;
use std::future::Future;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dinner_ai_rs::ai::{AiClient, create_client};
use dinner_ai_rs::cli::{Cli, Command};
use dinner_ai_rs::error::{DinnerError, Result};
use dinner_ai_rs::interface::{
    display_diners, display_image_slot, display_recipe, display_saved_recipes,
    display_weekly_plan, prompt_diners, prompt_dinner_type, prompt_edit_instruction,
    prompt_rating, prompt_recipe_form, prompt_weekly_types, prompt_yes_no,
    write_shopping_list_csv,
};
use dinner_ai_rs::logging::init_logging;
use dinner_ai_rs::models::{
    DataUrl, DinerList, DinnerTypeId, ImageSlot, ImageState, PNG_MIME, Recipe,
};
use dinner_ai_rs::planner::{
    default_week, edit_in_slot, edit_recipe_image, generate_into_slot, generate_recipe,
    generate_weekly_plan, random_week, resolve_dinner_type, resolve_dinner_types,
    total_multiplier, unknown_appetites,
};
use dinner_ai_rs::settings::Settings;
use dinner_ai_rs::state::{RateOutcome, RecipeStore};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings.log_level);

    let store_path = cli.file.clone().unwrap_or_else(|| settings.store_path.clone());
    let mut store = RecipeStore::open(&store_path);

    match cli.command.unwrap_or_default() {
        Command::Recipe {
            dinner_type,
            diners,
            image,
        } => cmd_recipe(&settings, &mut store, dinner_type, diners, image.as_deref()).await,
        Command::Week {
            dinner_types,
            random,
            seed,
            diners,
            shopping_csv,
        } => {
            cmd_week(
                &settings,
                &mut store,
                &dinner_types,
                random,
                seed,
                diners,
                shopping_csv.as_deref(),
            )
            .await
        }
        Command::Saved => {
            display_saved_recipes(store.recipes());
            Ok(())
        }
        Command::Show { id } => {
            let recipe = store.find(&id)?;
            display_recipe(recipe, None);
            Ok(())
        }
        Command::Find { query } => {
            let found: Vec<Recipe> = store.search_by_name(&query).into_iter().cloned().collect();
            if found.is_empty() {
                println!("No saved recipe matches '{}'.", query);
            } else {
                display_saved_recipes(&found);
            }
            Ok(())
        }
        Command::Rate { id, rating } => {
            let recipe = store.find(&id)?.clone();
            let outcome = store.rate(&recipe, rating)?;
            report_rating(&recipe, outcome);
            Ok(())
        }
        Command::Create => cmd_create(&mut store),
        Command::Edit { id } => cmd_edit(&mut store, &id),
        Command::Delete { id, yes } => cmd_delete(&mut store, &id, yes),
        Command::Image { id, out } => cmd_image(&settings, &store, &id, &out).await,
        Command::EditImage { input, prompt, out } => {
            cmd_edit_image(&settings, &input, prompt, &out).await
        }
    }
}

fn client_for(settings: &Settings) -> Result<Box<dyn AiClient>> {
    create_client(&settings.ai).map_err(DinnerError::AiUnavailable)
}

/// Run a generation, offering another attempt after each failure.
/// `None` means the user gave up.
async fn with_retry<T, F, Fut>(mut attempt: F) -> Result<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    loop {
        match attempt().await {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                if e.is_response_error() {
                    tracing::warn!(error = %e, "Model answer rejected");
                } else {
                    tracing::warn!(error = %e, "Generation failed");
                }
                eprintln!("{}", e.user_message());
                if !prompt_yes_no("Try again?", true)? {
                    return Ok(None);
                }
            }
        }
    }
}

fn collect_diners(appetites: Vec<String>) -> Result<DinerList> {
    let diners = if appetites.is_empty() {
        prompt_diners()?
    } else {
        DinerList::from_appetites(appetites)
    };
    for appetite in unknown_appetites(diners.as_slice()) {
        tracing::warn!(
            appetite = appetite,
            "Unknown appetite, counting it as one standard serving"
        );
    }
    display_diners(&diners);
    Ok(diners)
}

fn report_rating(recipe: &Recipe, outcome: RateOutcome) {
    match outcome {
        RateOutcome::Saved => println!("Saved '{}' to your recipes.", recipe.name),
        RateOutcome::Updated => println!("Updated the rating of '{}'.", recipe.name),
        RateOutcome::Removed => println!("Removed '{}' from your recipes.", recipe.name),
        RateOutcome::Ignored => println!("'{}' was not saved.", recipe.name),
    }
}

/// Offer a rating and apply it to the store.
fn rate_interactively(store: &mut RecipeStore, recipe: &mut Recipe) -> Result<()> {
    if let Some(rating) = prompt_rating(&recipe.name)? {
        let outcome = store.rate(recipe, rating)?;
        recipe.rating = Some(rating);
        report_rating(recipe, outcome);
    }
    Ok(())
}

fn write_image(url: &DataUrl, path: &Path) -> Result<()> {
    fs::write(path, url.decode_bytes()?)?;
    println!("Image written to {}", path.display());
    Ok(())
}

async fn cmd_recipe(
    settings: &Settings,
    store: &mut RecipeStore,
    dinner_type: Option<DinnerTypeId>,
    appetites: Vec<String>,
    image_out: Option<&Path>,
) -> Result<()> {
    let dinner_type = match dinner_type {
        Some(id) => resolve_dinner_type(id)?,
        None => prompt_dinner_type()?,
    };
    let diners = collect_diners(appetites)?;
    let client = client_for(settings)?;

    println!();
    println!("Creating your {} dinner...", dinner_type.title);

    let client: &dyn AiClient = client.as_ref();
    let table = diners.as_slice();
    let Some(mut recipe) = with_retry(move || generate_recipe(client, dinner_type, table)).await?
    else {
        return Ok(());
    };

    display_recipe(&recipe, Some(total_multiplier(table)));

    if let Some(path) = image_out {
        let mut slot = ImageSlot::default();
        generate_into_slot(client, &mut slot, &recipe).await;
        display_image_slot(&slot);
        if let Some(url) = slot.image() {
            write_image(url, path)?;
        }
    }

    rate_interactively(store, &mut recipe)
}

async fn cmd_week(
    settings: &Settings,
    store: &mut RecipeStore,
    dinner_types: &[DinnerTypeId],
    random: bool,
    seed: Option<u64>,
    appetites: Vec<String>,
    shopping_csv: Option<&Path>,
) -> Result<()> {
    let week = if random {
        match seed {
            Some(seed) => random_week(&mut StdRng::seed_from_u64(seed)),
            None => random_week(&mut rand::thread_rng()),
        }
    } else if dinner_types.is_empty() {
        if prompt_yes_no("Choose a dinner type for each day?", false)? {
            prompt_weekly_types()?
        } else {
            default_week()
        }
    } else {
        resolve_dinner_types(dinner_types)?
    };
    let diners = collect_diners(appetites)?;
    let client = client_for(settings)?;

    println!();
    println!("Planning your week...");

    let client: &dyn AiClient = client.as_ref();
    let table = diners.as_slice();
    let week = week.as_slice();
    let Some(mut plan) = with_retry(move || generate_weekly_plan(client, week, table)).await?
    else {
        return Ok(());
    };

    display_weekly_plan(&plan, Some(total_multiplier(table)));

    if let Some(path) = shopping_csv {
        write_shopping_list_csv(&plan, path)?;
        println!("Shopping list written to {}", path.display());
    }

    if prompt_yes_no("Rate this week's recipes?", false)? {
        for recipe in plan.weekly_recipes.iter_mut() {
            rate_interactively(store, recipe)?;
        }
    }

    Ok(())
}

fn cmd_create(store: &mut RecipeStore) -> Result<()> {
    println!("New recipe");
    let draft = prompt_recipe_form(None)?;
    if draft.name.is_empty() {
        return Err(DinnerError::InvalidInput("A recipe needs a name".to_string()));
    }

    let id = store.save_user_recipe(draft)?;
    println!("Saved recipe {}.", id);
    Ok(())
}

fn cmd_edit(store: &mut RecipeStore, id: &str) -> Result<()> {
    let recipe = store.find(id)?.clone();
    println!("Editing '{}'", recipe.name);

    let draft = prompt_recipe_form(Some(&recipe.to_draft()))?;
    store.update_recipe(&recipe.id, draft)?;
    println!("Recipe updated.");
    Ok(())
}

fn cmd_delete(store: &mut RecipeStore, id: &str, yes: bool) -> Result<()> {
    let recipe = store.find(id)?.clone();

    let confirmed = yes || prompt_yes_no(&format!("Delete '{}'?", recipe.name), false)?;
    if !confirmed {
        println!("Nothing deleted.");
        return Ok(());
    }

    store.delete(&recipe.id)?;
    println!("Deleted '{}'.", recipe.name);
    Ok(())
}

async fn cmd_image(settings: &Settings, store: &RecipeStore, id: &str, out: &Path) -> Result<()> {
    let recipe = store.find(id)?.clone();
    let client = client_for(settings)?;
    let mut slot = ImageSlot::default();

    println!("Photographing '{}'...", recipe.name);
    loop {
        generate_into_slot(client.as_ref(), &mut slot, &recipe).await;
        display_image_slot(&slot);
        if *slot.state() != ImageState::NoImage || !prompt_yes_no("Try again?", true)? {
            break;
        }
    }

    while let Some(url) = slot.image() {
        write_image(url, out)?;
        if !prompt_yes_no("Edit the image?", false)? {
            break;
        }
        let instruction = prompt_edit_instruction()?;
        if instruction.is_empty() {
            continue;
        }
        edit_in_slot(client.as_ref(), &mut slot, &instruction).await;
        display_image_slot(&slot);
    }

    Ok(())
}

fn mime_for(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok(PNG_MIME),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        _ => Err(DinnerError::InvalidImageFormat),
    }
}

async fn cmd_edit_image(
    settings: &Settings,
    input: &Path,
    prompt: Option<String>,
    out: &Path,
) -> Result<()> {
    let mime = mime_for(input)?;
    let source = DataUrl::from_bytes(mime, &fs::read(input)?);

    let instruction = match prompt {
        Some(p) => p,
        None => prompt_edit_instruction()?,
    };
    let client = client_for(settings)?;

    let existing = source.to_string();
    let client: &dyn AiClient = client.as_ref();
    let instruction = instruction.as_str();
    let existing = existing.as_str();
    if let Some(edited) =
        with_retry(move || edit_recipe_image(client, existing, instruction)).await?
    {
        write_image(&edited, out)?;
    }
    Ok(())
}
