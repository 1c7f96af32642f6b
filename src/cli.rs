use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::DinnerTypeId;

/// Dinner AI: dinner recipes and weekly plans generated for the people at your table.
#[derive(Parser, Debug)]
#[command(name = "dinner_ai")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved recipes JSON file (overrides the configured one).
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file. Defaults to dinner_ai.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one dinner recipe.
    Recipe {
        /// Dinner type. Asked interactively when omitted.
        #[arg(short = 't', long = "type", value_enum)]
        dinner_type: Option<DinnerTypeId>,

        /// Appetite of each diner (periquito, humano, bestia-parda). Repeat per person.
        #[arg(short, long = "diner")]
        diners: Vec<String>,

        /// Also generate a photo of the dish and write it to this PNG file.
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Generate a Monday-to-Sunday dinner plan with a shopping list.
    Week {
        /// Dinner type per day, Monday first. Give all 7 or none.
        #[arg(short = 't', long = "type", value_enum)]
        dinner_types: Vec<DinnerTypeId>,

        /// Pick a random dinner type for each day.
        #[arg(long, conflicts_with = "dinner_types")]
        random: bool,

        /// Seed for --random.
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Appetite of each diner. Repeat per person.
        #[arg(short, long = "diner")]
        diners: Vec<String>,

        /// Write the shopping list to this CSV file.
        #[arg(long)]
        shopping_csv: Option<PathBuf>,
    },

    /// List saved recipes.
    Saved,

    /// Show a saved recipe by id or id prefix.
    Show { id: String },

    /// Search saved recipes by name.
    Find { query: String },

    /// Rate a saved recipe (0 to 5 in half-star steps).
    Rate { id: String, rating: f64 },

    /// Write your own recipe.
    Create,

    /// Edit a saved recipe.
    Edit { id: String },

    /// Delete a saved recipe.
    Delete {
        id: String,

        /// Skip the confirmation.
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate a photo of a saved recipe, with optional follow-up edits.
    Image {
        id: String,

        /// Output PNG file.
        #[arg(short, long, default_value = "dish.png")]
        out: PathBuf,
    },

    /// Edit an existing image file with a text instruction.
    EditImage {
        /// Image to edit (png, jpg, jpeg, webp).
        #[arg(short, long)]
        input: PathBuf,

        /// Edit instruction. Asked interactively when omitted.
        #[arg(short, long)]
        prompt: Option<String>,

        /// Output PNG file.
        #[arg(short, long, default_value = "edited.png")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recipe {
            dinner_type: None,
            diners: Vec::new(),
            image: None,
        }
    }
}
