//! Configuration validation.

use crate::error::ConfigError;
use crate::server::validate_port;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate that configuration values are usable.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.captioner.program.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "captioner.program must not be empty".into(),
            ));
        }
        if self.captioner.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "captioner.model must not be empty".into(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".into(),
            ));
        }
        if validate_port(&self.server.port).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "server.port must be numeric, got {:?}",
                self.server.port
            )));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}",
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
