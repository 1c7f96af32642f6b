use std::fmt;

use thiserror::Error;

use crate::ai::AiError;

/// The user-facing operation an AI call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Recipe,
    WeeklyPlan,
    Image,
    ImageEdit,
}

impl Operation {
    /// Generic message shown when the operation fails for a non-specific reason.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Recipe => "Could not generate the recipe. Please try again.",
            Operation::WeeklyPlan => "Could not generate the weekly plan. Please try again.",
            Operation::Image => "Could not generate the dish image. Please try again.",
            Operation::ImageEdit => "Could not edit the dish image. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Recipe => f.write_str("recipe"),
            Operation::WeeklyPlan => f.write_str("weekly plan"),
            Operation::Image => f.write_str("image"),
            Operation::ImageEdit => f.write_str("image edit"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DinnerError {
    #[error("The AI returned an empty response.")]
    EmptyResponse { context: String },

    /// `raw` and `source` are for logs; the message is safe to show.
    #[error("The AI returned a badly formatted response. Please try again.")]
    MalformedResponse {
        context: String,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("The AI response is incomplete: {reason}. Please try again.")]
    IncompleteResponse { context: String, reason: String },

    #[error("The AI did not return an image.")]
    NoImageReturned,

    #[error("The AI did not return an edited image.")]
    NoEditedImageReturned,

    #[error("Invalid image format. Only base64 data URLs are supported.")]
    InvalidImageFormat,

    #[error("{operation} generation failed: {source}")]
    GenerationFailed {
        operation: Operation,
        #[source]
        source: AiError,
    },

    #[error("AI client unavailable: {0}")]
    AiUnavailable(#[source] AiError),

    #[error("A weekly plan needs exactly 7 dinner types, got {0}")]
    InvalidPlanLength(usize),

    #[error("At least one diner is required")]
    NoDiners,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid rating {0}: use 0 to 5 in half-star steps")]
    InvalidRating(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Image decoding error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl DinnerError {
    /// Message to show the user. Decided by kind; details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            DinnerError::GenerationFailed { operation, .. } => {
                operation.failure_message().to_string()
            }
            DinnerError::NoImageReturned => Operation::Image.failure_message().to_string(),
            DinnerError::NoEditedImageReturned => {
                Operation::ImageEdit.failure_message().to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether the error came from the model's output rather than the transport.
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            DinnerError::EmptyResponse { .. }
                | DinnerError::MalformedResponse { .. }
                | DinnerError::IncompleteResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DinnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_errors_surface_verbatim() {
        let err = DinnerError::EmptyResponse {
            context: "recipe".to_string(),
        };
        assert_eq!(err.user_message(), "The AI returned an empty response.");
        assert!(err.is_response_error());

        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = DinnerError::MalformedResponse {
            context: "recipe".to_string(),
            raw: "{not json".to_string(),
            source,
        };
        assert!(!err.user_message().contains("not json"));
    }

    #[test]
    fn test_transport_failures_use_generic_message() {
        let err = DinnerError::GenerationFailed {
            operation: Operation::WeeklyPlan,
            source: AiError::RequestFailed("connection reset".to_string()),
        };
        assert_eq!(
            err.user_message(),
            Operation::WeeklyPlan.failure_message()
        );
        assert!(!err.is_response_error());
    }

    #[test]
    fn test_missing_images_use_generic_message() {
        assert_eq!(
            DinnerError::NoImageReturned.user_message(),
            Operation::Image.failure_message()
        );
        assert_eq!(
            DinnerError::NoEditedImageReturned.user_message(),
            Operation::ImageEdit.failure_message()
        );
        assert_eq!(
            DinnerError::InvalidImageFormat.user_message(),
            "Invalid image format. Only base64 data URLs are supported."
        );
    }
}
