//! alttext core - generate image alt-text with a local captioning model.
//!
//! The model runs out of process. Each sample is one model invocation whose
//! free-form output is reduced to a single caption:
//!
//! ```text
//! CaptionRequest → Captioner (ollama run) → extract_caption → AltTextResponse
//!                  └──────────── repeated `count` times ────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use alttext_core::{CaptionRequest, Config, OllamaCaptioner, Sampler};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> alttext_core::Result<()> {
//!     let config = Config::load()?;
//!     let sampler = Sampler::new(Arc::new(OllamaCaptioner::from_config(&config)));
//!
//!     let request = CaptionRequest::new("./cat.png", "llava", 3);
//!     let response = sampler.generate(&request).await?;
//!     println!("{:?}", response.alt_texts);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod captioner;
pub mod config;
pub mod error;
pub mod extract;
pub mod sampler;
pub mod server;
pub mod types;

// Re-exports for convenient access
pub use captioner::{Captioner, OllamaCaptioner};
pub use config::Config;
pub use error::{AltTextError, ConfigError, ExecutionError, Result, ValidationError};
pub use extract::extract_caption;
pub use sampler::Sampler;
pub use types::{AltTextResponse, CaptionRequest};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
