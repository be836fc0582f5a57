//! `alttext --server`: run the HTTP API.

use alttext_core::server::{self, AppState};
use alttext_core::{Config, OllamaCaptioner, Sampler};
use std::sync::Arc;

/// Validate `port`, then serve until interrupted.
///
/// A non-numeric port prints a message and returns without starting.
pub async fn execute(port: &str, config: &Config) -> anyhow::Result<()> {
    if server::validate_port(port).is_err() {
        println!("Invalid port number.");
        return Ok(());
    }

    let sampler = Sampler::new(Arc::new(OllamaCaptioner::from_config(config)));
    let state = AppState::new(sampler, config);

    println!("Running server on {}:{}", config.server.host, port);
    server::serve(state, &config.server.host, port).await?;
    Ok(())
}
