use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use regex::Regex;

use crate::error::{DinnerError, Result};

/// Mime type of every image the model hands back.
pub const PNG_MIME: &str = "image/png";

static DATA_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(.+);base64,(.+)$").expect("data URL pattern is valid")
});

/// A `data:<mime>;base64,<payload>` image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    /// Base64 payload, kept encoded.
    pub data: String,
}

impl DataUrl {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// A PNG data URL around an already-encoded payload.
    pub fn png(data: impl Into<String>) -> Self {
        Self::new(PNG_MIME, data)
    }

    /// Encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Decode the payload into raw bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }
}

impl FromStr for DataUrl {
    type Err = DinnerError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = DATA_URL_RE
            .captures(s)
            .ok_or(DinnerError::InvalidImageFormat)?;
        Ok(Self::new(&caps[1], &caps[2]))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Where a recipe's image widget currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    NoImage,
    Generating,
    Displayed(DataUrl),
    /// An edit is in flight; the shown image stays until it completes.
    Editing(DataUrl),
}

/// Image widget for one displayed recipe.
///
/// Only one image operation may be outstanding at a time. A failed
/// operation falls back to the last stable state with its message attached.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    state: ImageState,
    error: Option<String>,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self {
            state: ImageState::NoImage,
            error: None,
        }
    }
}

impl ImageSlot {
    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Message from the last failed operation, cleared when a new one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, ImageState::Generating | ImageState::Editing(_))
    }

    /// The image currently on screen, if any.
    pub fn image(&self) -> Option<&DataUrl> {
        match &self.state {
            ImageState::Displayed(url) | ImageState::Editing(url) => Some(url),
            _ => None,
        }
    }

    /// Start generating. Returns false (and changes nothing) unless empty.
    pub fn begin_generate(&mut self) -> bool {
        if self.state != ImageState::NoImage {
            return false;
        }
        self.error = None;
        self.state = ImageState::Generating;
        true
    }

    /// Start editing the shown image. Returns false unless one is displayed.
    pub fn begin_edit(&mut self) -> bool {
        let ImageState::Displayed(current) = &self.state else {
            return false;
        };
        self.error = None;
        self.state = ImageState::Editing(current.clone());
        true
    }

    /// Settle the in-flight operation.
    pub fn finish(&mut self, outcome: Result<DataUrl>) {
        let fallback = match std::mem::replace(&mut self.state, ImageState::NoImage) {
            ImageState::Editing(previous) => ImageState::Displayed(previous),
            ImageState::Generating => ImageState::NoImage,
            settled => settled,
        };

        match outcome {
            Ok(url) => {
                self.state = ImageState::Displayed(url);
                self.error = None;
            }
            Err(e) => {
                self.state = fallback;
                self.error = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_url() {
        let url: DataUrl = "data:image/jpeg;base64,AAAA".parse().unwrap();
        assert_eq!(url.mime_type, "image/jpeg");
        assert_eq!(url.data, "AAAA");
        assert_eq!(url.to_string(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_reject_malformed_data_url() {
        for bad in ["not-a-data-url", "data:image/png,AAAA", "data:;base64,", ""] {
            assert!(
                matches!(bad.parse::<DataUrl>(), Err(DinnerError::InvalidImageFormat)),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        let url = DataUrl::from_bytes(PNG_MIME, b"\x89PNG");
        assert_eq!(url.decode_bytes().unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_generate_then_edit() {
        let mut slot = ImageSlot::default();
        assert!(!slot.begin_edit());
        assert!(slot.begin_generate());
        assert!(slot.is_busy());
        assert!(!slot.begin_generate());

        slot.finish(Ok(DataUrl::png("AAAA")));
        assert_eq!(slot.state(), &ImageState::Displayed(DataUrl::png("AAAA")));

        assert!(slot.begin_edit());
        assert_eq!(slot.image(), Some(&DataUrl::png("AAAA")));
        slot.finish(Ok(DataUrl::png("BBBB")));
        assert_eq!(slot.image(), Some(&DataUrl::png("BBBB")));
    }

    #[test]
    fn test_failure_returns_to_stable_state() {
        let mut slot = ImageSlot::default();
        slot.begin_generate();
        slot.finish(Err(DinnerError::NoImageReturned));
        assert_eq!(slot.state(), &ImageState::NoImage);
        assert!(slot.error().is_some());

        slot.begin_generate();
        slot.finish(Ok(DataUrl::png("AAAA")));
        slot.begin_edit();
        slot.finish(Err(DinnerError::NoEditedImageReturned));
        assert_eq!(slot.state(), &ImageState::Displayed(DataUrl::png("AAAA")));
        assert!(slot.error().is_some());

        assert!(slot.begin_edit());
        assert!(slot.error().is_none());
    }
}
