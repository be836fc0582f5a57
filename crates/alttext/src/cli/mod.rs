//! Command-line handlers.
//!
//! Bare `alttext` either captions one image or, with `--server`, serves the
//! HTTP API. Configuration management lives under `alttext config`.

pub mod config;
mod generate;
mod serve;

use alttext_core::Config;
use clap::{Args, ValueEnum};

/// Arguments for captioning an image or starting the server.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to the image file
    pub image_path: Option<String>,

    /// Number of alt texts to generate [default: 3]
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Model to use for generating alt text [default: llava]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output format for generated alt texts
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Run as a web server
    #[arg(long)]
    pub server: bool,

    /// Port to run the server on [default: 8080]
    #[arg(short, long)]
    pub port: Option<String>,
}

/// How generated alt texts are printed.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list for humans
    #[default]
    Text,
    /// `{"alt_texts": [...]}`, same as the HTTP API
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Execute a bare `alttext` invocation.
///
/// Without an image path (and without `--server`) this prints `usage` and an
/// error line, then returns successfully.
pub async fn execute(args: RunArgs, config: &Config, usage: &str) -> anyhow::Result<()> {
    if args.server {
        let port = args.port.unwrap_or_else(|| config.server.port.clone());
        return serve::execute(&port, config).await;
    }

    match args.image_path {
        Some(ref image_path) => generate::execute(image_path, &args, config).await,
        None => {
            println!("{}", missing_image_path_message(usage));
            Ok(())
        }
    }
}

/// Usage text followed by a blank line and the missing-path error.
fn missing_image_path_message(usage: &str) -> String {
    format!("{}\n\nError: Image path is required.", usage.trim_end())
}
