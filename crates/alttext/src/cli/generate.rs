//! One-shot caption generation for a single image.

use super::{OutputFormat, RunArgs};
use alttext_core::{AltTextResponse, CaptionRequest, Config, OllamaCaptioner, Sampler};
use anyhow::Context;
use std::sync::Arc;

/// Caption `image_path` and print the results to stdout.
pub async fn execute(image_path: &str, args: &RunArgs, config: &Config) -> anyhow::Result<()> {
    let request = CaptionRequest::new(
        image_path,
        args.model
            .clone()
            .unwrap_or_else(|| config.captioner.model.clone()),
        args.count.unwrap_or(config.generation.count),
    );
    tracing::debug!(?request, "Generating alt text");

    let sampler = Sampler::new(Arc::new(OllamaCaptioner::from_config(config)));

    let pb = create_progress_bar(request.count as u64);
    let result = sampler
        .generate_with_progress(&request, |done, _| pb.set_position(done as u64))
        .await;
    pb.finish_and_clear();

    let response = result.context("Error executing command")?;
    println!("{}", render(&response, args.format)?);
    Ok(())
}

/// Format captions for stdout.
fn render(response: &AltTextResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text if response.is_empty() => Ok("No alt texts generated.".to_string()),
        OutputFormat::Text => {
            let mut out = String::from("Generated Alt Texts:");
            for (i, alt_text) in response.alt_texts.iter().enumerate() {
                out.push_str(&format!("\n{}. {}", i + 1, alt_text));
            }
            Ok(out)
        }
    }
}

/// Spinner with a sample counter, drawn on stderr.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] sample {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("waiting for model...");
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}
