//! Error types for alt-text generation.
//!
//! Errors are split by where they originate: the external captioning process,
//! caller input, and configuration loading.

use thiserror::Error;

/// Top-level error type for alttext operations.
#[derive(Error, Debug)]
pub enum AltTextError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The captioning process failed
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Missing or malformed caller input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to run the external captioning process.
///
/// Fatal to the request that triggered it. Never retried.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be started at all
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited with a non-success status
    #[error("{program} exited with {status}{}", format_stderr(.stderr))]
    Exited {
        program: String,
        status: String,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Missing or malformed input from the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No image path was supplied
    #[error("image_path is required")]
    MissingImagePath,

    /// The port is not a number
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for alttext results.
pub type Result<T> = std::result::Result<T, AltTextError>;
