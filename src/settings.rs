use std::env;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Default config file looked up next to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dinner_ai.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// JSON file holding the saved recipe collection.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub ai: AiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiSettings {
    /// Only `gemini` is supported.
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: default_temperature(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_level: default_log_level(),
            ai: AiSettings::default(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("recipes.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

impl Settings {
    /// Load settings: defaults, then the optional TOML file, then
    /// `DINNER_AI_*` environment variables (`__` separates nesting, e.g.
    /// `DINNER_AI_AI__TEXT_MODEL`).
    ///
    /// The API key may also come from `GEMINI_API_KEY` or `API_KEY`.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file_path = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let builder = Config::builder()
            .add_source(File::from(file_path).required(config_file.is_some()))
            .add_source(
                Environment::with_prefix("DINNER_AI")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if settings.ai.api_key.is_none() {
            settings.ai.api_key = env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok();
        }

        Ok(settings)
    }
}
