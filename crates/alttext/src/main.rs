//! alttext CLI - accessible alt-text for images from a local captioning model.
//!
//! Runs `ollama run <model> <prompt>` one or more times per image and prints
//! the captions it finds. The same pipeline is available over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Three candidate captions for one image
//! alttext photo.jpg
//!
//! # Five captions from a different model, as JSON
//! alttext --count 5 --model bakllava --format json photo.jpg
//!
//! # Serve GET /generate-alt-text on port 9000
//! alttext --server --port 9000
//!
//! # View configuration
//! alttext config show
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// alttext - Generate accessible alt-text for images with a local captioning model.
#[derive(Parser, Debug)]
#[command(name = "alttext")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "ALTTEXT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: cli::RunArgs,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(alttext_core::Config::default_path);
    let config = match alttext_core::Config::load_path(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `alttext config path`."
            );
            alttext_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("alttext v{}", alttext_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => cli::config::execute(args, &config, &config_path),
        None => {
            let usage = Cli::command().render_help().to_string();
            cli::execute(cli.run, &config, &usage).await
        }
    }
}
