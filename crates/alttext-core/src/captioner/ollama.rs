//! Captioner that shells out to the `ollama` CLI.
//!
//! Runs `ollama run <model> <prompt>` once per call and buffers stdout. There
//! is no timeout: a hung model blocks the caller until it exits.

use super::{build_prompt, Captioner};
use crate::config::Config;
use crate::error::ExecutionError;
use async_trait::async_trait;
use std::time::Instant;
use tokio::process::Command;

/// Local vision model reached through the `ollama` executable.
pub struct OllamaCaptioner {
    program: String,
    prompt: String,
}

impl OllamaCaptioner {
    pub fn new(program: &str, prompt: &str) -> Self {
        Self {
            program: program.to_string(),
            prompt: prompt.to_string(),
        }
    }

    /// Create a captioner from the `[captioner]` config section.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.program(), &config.captioner.prompt)
    }

    /// The executable this captioner runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, image_path: &str, model: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("run")
            .arg(model)
            .arg(build_prompt(&self.prompt, image_path));
        cmd
    }
}

#[async_trait]
impl Captioner for OllamaCaptioner {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn run(&self, image_path: &str, model: &str) -> Result<String, ExecutionError> {
        let start = Instant::now();
        tracing::debug!(program = %self.program, model, image_path, "Starting captioner");

        let output = self
            .command(image_path, model)
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExecutionError::Exited {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            bytes = text.len(),
            "Captioner finished"
        );
        Ok(text)
    }
}
