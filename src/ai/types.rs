//! Request and response shapes shared by every AI client.
//!
//! The response side mirrors the Gemini `generateContent` wire format, so the
//! HTTP client can deserialize straight into it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base64 bytes with their mime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// One piece of a message: text or an inline blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(data: InlineData) -> Self {
        Self {
            text: None,
            inline_data: Some(data),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Candidates returned by a generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// A response holding a single candidate with the given parts.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Content { role: None, parts },
            }],
        }
    }

    /// Concatenated text of the first candidate, `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// First inline blob of the first candidate.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

/// A structured-output text generation request.
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Short label for logs, e.g. `recipe` or `weekly plan`.
    pub context: String,
    pub prompt: String,
    /// Output schema the model must follow.
    pub schema: Value,
}

/// An image-only generation request, optionally with a source image to edit.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub image: Option<InlineData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gemini_response() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 12}
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("Here you go"));
        assert_eq!(response.first_inline_data().unwrap().data, "AAAA");
    }

    #[test]
    fn test_empty_response_has_no_text_or_image() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn test_text_joins_parts() {
        let response = GenerateResponse::from_parts(vec![Part::text("{\"a\":"), Part::text("1}")]);
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }
}
