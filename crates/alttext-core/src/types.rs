//! Request and response types shared by the CLI and HTTP server.

use serde::{Deserialize, Serialize};

/// One alt-text generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    /// Path handed to the model as-is
    pub image_path: String,
    /// Model identifier, e.g. "llava"
    pub model: String,
    /// Number of samples to draw
    pub count: usize,
}

impl CaptionRequest {
    pub fn new(image_path: impl Into<String>, model: impl Into<String>, count: usize) -> Self {
        Self {
            image_path: image_path.into(),
            model: model.into(),
            count,
        }
    }
}

/// Captions produced for one request, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltTextResponse {
    pub alt_texts: Vec<String>,
}

impl AltTextResponse {
    pub fn is_empty(&self) -> bool {
        self.alt_texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alt_texts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_shape() {
        let response = AltTextResponse {
            alt_texts: vec!["a cat on a mat".to_string(), "a cat on a mat".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"alt_texts":["a cat on a mat","a cat on a mat"]}"#
        );
    }

    #[test]
    fn test_empty_response_serializes_as_array() {
        let response = AltTextResponse::default();
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"alt_texts":[]}"#);
        assert!(response.is_empty());
    }
}
