//! Captioner abstraction over the external image-captioning model.
//!
//! The model is never linked into this crate. It is reached through a
//! [`Captioner`], which the sampler and server hold as `Arc<dyn Captioner>`
//! so tests can swap in a scripted implementation.

mod ollama;

pub use ollama::OllamaCaptioner;

use crate::error::ExecutionError;
use async_trait::async_trait;

/// Something that can turn an image path into raw caption text.
///
/// Uses `async_trait` because native async fn in trait is not object-safe.
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Backend name for logging (e.g., "ollama").
    fn name(&self) -> &str;

    /// Run the model once against `image_path` and return its raw output.
    ///
    /// The path is not checked here; a missing file is reported by the model.
    async fn run(&self, image_path: &str, model: &str) -> Result<String, ExecutionError>;
}

/// Build the instruction sent to the model: `prompt` followed by the image path.
pub fn build_prompt(prompt: &str, image_path: &str) -> String {
    format!("{prompt} {image_path}")
}
