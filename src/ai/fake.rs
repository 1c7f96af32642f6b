//! Fake AI client for tests.
//!
//! Responses are served from queues in the order they were added, so a test
//! can script exactly what the "model" says.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::types::{GenerateResponse, ImageRequest, InlineData, Part, TextRequest};
use super::{AiClient, AiError};

#[derive(Debug, Default)]
pub struct FakeClient {
    text_responses: Mutex<VecDeque<Result<Option<String>, AiError>>>,
    image_responses: Mutex<VecDeque<Result<GenerateResponse, AiError>>>,
    text_requests: Mutex<Vec<TextRequest>>,
    image_requests: Mutex<Vec<ImageRequest>>,
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer.
    pub fn with_text(self, text: &str) -> Self {
        lock(&self.text_responses).push_back(Ok(Some(text.to_string())));
        self
    }

    /// Queue an answer with no text at all.
    pub fn with_no_text(self) -> Self {
        lock(&self.text_responses).push_back(Ok(None));
        self
    }

    pub fn with_text_error(self, error: AiError) -> Self {
        lock(&self.text_responses).push_back(Err(error));
        self
    }

    /// Queue an image answer carrying one inline PNG payload.
    pub fn with_image(self, base64_data: &str) -> Self {
        let response = GenerateResponse::from_parts(vec![Part::inline(InlineData {
            mime_type: "image/png".to_string(),
            data: base64_data.to_string(),
        })]);
        self.with_image_response(response)
    }

    pub fn with_image_response(self, response: GenerateResponse) -> Self {
        lock(&self.image_responses).push_back(Ok(response));
        self
    }

    pub fn with_image_error(self, error: AiError) -> Self {
        lock(&self.image_responses).push_back(Err(error));
        self
    }

    pub fn text_calls(&self) -> usize {
        lock(&self.text_requests).len()
    }

    pub fn image_calls(&self) -> usize {
        lock(&self.image_requests).len()
    }

    /// The most recent text request.
    pub fn last_text_request(&self) -> Option<TextRequest> {
        lock(&self.text_requests).last().cloned()
    }

    /// The most recent image request.
    pub fn last_image_request(&self) -> Option<ImageRequest> {
        lock(&self.image_requests).last().cloned()
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn generate_text(&self, request: TextRequest) -> Result<Option<String>, AiError> {
        lock(&self.text_requests).push(request);
        lock(&self.text_responses).pop_front().unwrap_or_else(|| {
            Err(AiError::NotConfigured(
                "fake client has no text response queued".to_string(),
            ))
        })
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<GenerateResponse, AiError> {
        lock(&self.image_requests).push(request);
        lock(&self.image_responses).pop_front().unwrap_or_else(|| {
            Err(AiError::NotConfigured(
                "fake client has no image response queued".to_string(),
            ))
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
