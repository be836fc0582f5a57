//! Sub-configuration structs with defaults matching the `ollama` CLI workflow.

use serde::{Deserialize, Serialize};

/// Instruction given to the captioning model. The image path is appended
/// after a single space.
pub const DEFAULT_PROMPT: &str = "You are an assistant for the visually impaired. \
Answer concisely for someone who is visually impaired. \
Write an alt-text for this image. \
Your response should be one or two sentences. \
Just state what you see descriptively.";

/// External captioning process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionerConfig {
    /// Executable to run (supports `~`)
    pub program: String,

    /// Model passed as `run <model>`
    pub model: String,

    /// Instruction text preceding the image path
    pub prompt: String,
}

impl Default for CaptionerConfig {
    fn default() -> Self {
        Self {
            program: "ollama".to_string(),
            model: "llava".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of captions to sample per image
    pub count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { count: 3 }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on. Kept as text and checked with
    /// [`validate_port`](crate::server::validate_port) before binding.
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: "8080".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
