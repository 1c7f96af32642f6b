//! Generative AI client abstraction.
//!
//! The planner never talks to a concrete service: it receives an
//! [`AiClient`] so that tests can swap in [`FakeClient`].

mod fake;
mod gemini;
mod types;

pub use fake::FakeClient;
pub use gemini::GeminiClient;
pub use types::{
    Candidate, Content, GenerateResponse, ImageRequest, InlineData, Part, TextRequest,
};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::settings::AiSettings;

/// Error type for AI calls.
#[derive(Debug, Clone, Error)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("AI client not configured: {0}")]
    NotConfigured(String),
}

/// A generative model reachable over some transport.
///
/// Each call is attempted exactly once.
#[async_trait]
pub trait AiClient: Send + Sync + fmt::Debug {
    /// Generate text following the request's schema. `Ok(None)` means the
    /// model answered with no text at all.
    async fn generate_text(&self, request: TextRequest) -> Result<Option<String>, AiError>;

    /// Generate an image. The caller looks for inline data in the candidates.
    async fn generate_image(&self, request: ImageRequest) -> Result<GenerateResponse, AiError>;

    /// Provider name for logs (e.g. "gemini", "fake").
    fn provider_name(&self) -> &'static str;
}

/// Build the configured client.
pub fn create_client(settings: &AiSettings) -> Result<Box<dyn AiClient>, AiError> {
    match settings.provider.as_str() {
        "gemini" => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| {
                    AiError::NotConfigured(
                        "set GEMINI_API_KEY or ai.api_key in dinner_ai.toml".to_string(),
                    )
                })?;
            Ok(Box::new(GeminiClient::new(api_key, settings)))
        }
        other => Err(AiError::NotConfigured(format!("Unknown provider: {}", other))),
    }
}
