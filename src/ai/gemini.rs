//! Gemini `generateContent` REST client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{Content, GenerateResponse, ImageRequest, Part, TextRequest};
use super::{AiClient, AiError};
use crate::settings::AiSettings;

/// Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, settings: &AiSettings) -> Self {
        Self {
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            text_model: settings.text_model.clone(),
            image_model: settings.image_model.clone(),
            temperature: settings.temperature,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Request body for structured text generation.
    fn text_body(&self, request: TextRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: user_content(vec![Part::text(request.prompt)]),
            generation_config: GenerationConfig {
                response_mime_type: Some("application/json"),
                response_schema: Some(request.schema),
                temperature: Some(self.temperature),
                ..GenerationConfig::default()
            },
        }
    }

    async fn generate(
        &self,
        context: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateResponse, AiError> {
        tracing::debug!(context = context, model = model, "Calling Gemini API");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(AiError::Api {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::Api {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AiError::ParseError(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

fn user_content(parts: Vec<Part>) -> Vec<Content> {
    vec![Content {
        role: Some("user".to_string()),
        parts,
    }]
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<Option<String>, AiError> {
        let context = request.context.clone();
        let body = self.text_body(request);

        let response = self.generate(&context, &self.text_model, &body).await?;
        Ok(response.text())
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<GenerateResponse, AiError> {
        // Source image goes first so the instruction reads as an edit of it.
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = request.image {
            parts.push(Part::inline(image));
        }
        parts.push(Part::text(request.prompt));

        let body = GenerateContentRequest {
            contents: user_content(parts),
            generation_config: GenerationConfig {
                response_modalities: Some(vec!["IMAGE"]),
                ..GenerationConfig::default()
            },
        };

        self.generate("image", &self.image_model, &body).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
