//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pacing::Pacing;
use crate::rubric::Rubric;

/// Default judge model identifier
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default number of items per checkpointed batch
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Default number of judge attempts per (item, rubric)
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base URL of the chat-completions service
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Default request timeout for one judge call
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Connection settings for the HTTP judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeSettings {
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL; `/v1/chat/completions` is appended
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Fully resolved configuration for one evaluation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    /// Directory receiving one checkpoint file per batch
    pub checkpoint_dir: PathBuf,
    /// Rubrics to score, in request order, without duplicates
    pub metrics: Vec<Rubric>,
    pub batch_size: usize,
    pub max_retries: u32,
    pub judge: JudgeSettings,
    pub pacing: Pacing,
}

/// The run configuration as echoed into the final report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportConfig {
    pub input_file: String,
    pub output_file: String,
    pub model: String,
    pub metrics: Vec<Rubric>,
    pub batch_size: usize,
    pub max_retries: u32,
}

/// Optional settings, as read from a TOML file or collected from flags.
///
/// Every field may be missing. `PartialConfig::or` layers two of these and
/// `RunConfig::resolve` fills the remaining gaps with defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub model: Option<String>,
    pub metrics: Option<Vec<Rubric>>,
    pub batch_size: Option<usize>,
    pub max_retries: Option<u32>,
    pub checkpoint_dir: Option<PathBuf>,
    pub judge: PartialJudgeConfig,
    pub pacing: PartialPacingConfig,
}

/// `[judge]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialJudgeConfig {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `[pacing]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialPacingConfig {
    pub call_interval_ms: Option<u64>,
    pub retry_delay_ms: Option<u64>,
}
