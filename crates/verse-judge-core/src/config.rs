//! Run configuration for verse-judge
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, an optional TOML file passed with `--config`, built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};
use crate::pacing::{Pacing, DEFAULT_CALL_INTERVAL_MS, DEFAULT_RETRY_DELAY_MS};
use crate::rubric::{dedup_rubrics, Rubric};

pub use types::{
    JudgeSettings, PartialConfig, PartialJudgeConfig, PartialPacingConfig, ReportConfig,
    RunConfig, DEFAULT_API_BASE, DEFAULT_BATCH_SIZE, DEFAULT_MAX_RETRIES, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECONDS,
};

impl PartialConfig {
    /// Load a partial configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| EvalError::io_operation("read config", path.display(), e))?;
        let config: PartialConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Fill every unset field of `self` from `fallback`.
    pub fn or(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            model: self.model.or(fallback.model),
            metrics: self.metrics.or(fallback.metrics),
            batch_size: self.batch_size.or(fallback.batch_size),
            max_retries: self.max_retries.or(fallback.max_retries),
            checkpoint_dir: self.checkpoint_dir.or(fallback.checkpoint_dir),
            judge: PartialJudgeConfig {
                api_base: self.judge.api_base.or(fallback.judge.api_base),
                timeout_secs: self.judge.timeout_secs.or(fallback.judge.timeout_secs),
            },
            pacing: PartialPacingConfig {
                call_interval_ms: self
                    .pacing
                    .call_interval_ms
                    .or(fallback.pacing.call_interval_ms),
                retry_delay_ms: self.pacing.retry_delay_ms.or(fallback.pacing.retry_delay_ms),
            },
        }
    }
}

impl RunConfig {
    /// Resolve a run configuration from layered settings and validate it.
    pub fn resolve(
        input_file: PathBuf,
        output_file: PathBuf,
        partial: PartialConfig,
    ) -> Result<Self> {
        let checkpoint_dir = partial
            .checkpoint_dir
            .unwrap_or_else(|| default_checkpoint_dir(&output_file));

        let metrics = partial.metrics.unwrap_or_else(|| Rubric::ALL.to_vec());

        let config = RunConfig {
            input_file,
            output_file,
            checkpoint_dir,
            metrics: dedup_rubrics(&metrics),
            batch_size: partial.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            max_retries: partial.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            judge: JudgeSettings {
                model: partial.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: partial
                    .judge
                    .api_base
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout_seconds: partial.judge.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            },
            pacing: Pacing::from_millis(
                partial
                    .pacing
                    .call_interval_ms
                    .unwrap_or(DEFAULT_CALL_INTERVAL_MS),
                partial.pacing.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the run loop cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(EvalError::invalid_value("batch size", "0 (must be at least 1)"));
        }
        if self.max_retries == 0 {
            return Err(EvalError::invalid_value(
                "max retries",
                "0 (must be at least 1)",
            ));
        }
        if self.metrics.is_empty() {
            return Err(EvalError::invalid_value("metrics", "empty list"));
        }
        if self.judge.model.trim().is_empty() {
            return Err(EvalError::invalid_value("model", "empty identifier"));
        }
        if self.judge.timeout_seconds == 0 {
            return Err(EvalError::invalid_value(
                "judge timeout",
                "0 seconds (must be at least 1)",
            ));
        }
        if self.judge.api_base.trim().is_empty() {
            return Err(EvalError::invalid_value("api base", "empty URL"));
        }
        Ok(())
    }

    /// The subset of settings recorded in the final report
    pub fn report_view(&self) -> ReportConfig {
        ReportConfig {
            input_file: self.input_file.display().to_string(),
            output_file: self.output_file.display().to_string(),
            model: self.judge.model.clone(),
            metrics: self.metrics.clone(),
            batch_size: self.batch_size,
            max_retries: self.max_retries,
        }
    }
}

/// Checkpoints land next to the report unless told otherwise
fn default_checkpoint_dir(output_file: &Path) -> PathBuf {
    match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
