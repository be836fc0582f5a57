//! HTTP front end for alt-text generation.
//!
//! A single `GET /generate-alt-text` endpoint backed by a shared [`Sampler`].
//! Requests are independent; the only shared state is read-only.

mod handlers;

pub use handlers::{parse_count, AltTextQuery};

use crate::config::Config;
use crate::error::{AltTextError, ValidationError};
use crate::sampler::Sampler;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub sampler: Sampler,
    /// Model used when the query omits `model`
    pub default_model: String,
    /// Sample count used when the query omits or garbles `count`
    pub default_count: usize,
}

impl AppState {
    pub fn new(sampler: Sampler, config: &Config) -> Self {
        Self {
            sampler,
            default_model: config.captioner.model.clone(),
            default_count: config.generation.count,
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-alt-text", get(handlers::generate_alt_text))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Check that `port` is a number. The string itself is what gets bound.
pub fn validate_port(port: &str) -> Result<(), ValidationError> {
    port.parse::<u16>()
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidPort(port.to_string()))
}

/// Serve the API on `host:port` until Ctrl-C or SIGTERM.
pub async fn serve(state: AppState, host: &str, port: &str) -> Result<(), AltTextError> {
    validate_port(port)?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Running server on {addr} with {} captioner",
        state.sampler.captioner_name()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl-C received, shutting down..."),
        _ = terminate => tracing::info!("Terminate signal received, shutting down..."),
    }
}
