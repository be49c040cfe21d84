use std::path::PathBuf;

use clap::Args;

use super::parse::parse_rubric;
use verse_judge_core::config::{PartialConfig, PartialJudgeConfig, PartialPacingConfig};
use verse_judge_core::rubric::Rubric;

/// Flags for `verse-judge evaluate`. Unset flags fall back to the config
/// file, then to built-in defaults.
#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// JSONL input with `src` (source poem) and `hyp` (translation) fields
    #[arg(long, alias = "input_file")]
    pub input_file: PathBuf,

    /// Where to write the JSON report
    #[arg(long, alias = "output_file")]
    pub output_file: PathBuf,

    /// Judge model identifier [default: gpt-4]
    #[arg(long, env = "VERSE_JUDGE_MODEL")]
    pub model: Option<String>,

    /// Rubrics to score [default: all three]
    #[arg(long, alias = "rubrics", num_args = 1.., value_parser = parse_rubric)]
    pub metrics: Option<Vec<Rubric>>,

    /// Items per checkpointed batch [default: 10]
    #[arg(long, alias = "batch_size")]
    pub batch_size: Option<usize>,

    /// Judge attempts per translation and rubric [default: 3]
    #[arg(long, alias = "max_retries")]
    pub max_retries: Option<u32>,

    /// Directory for per-batch checkpoint files [default: next to the report]
    #[arg(long)]
    pub checkpoint_dir: Option<PathBuf>,

    /// Base URL of the chat-completions service [default: https://api.openai.com]
    #[arg(long, env = "VERSE_JUDGE_API_BASE")]
    pub api_base: Option<String>,

    /// Request timeout per judge call in seconds [default: 60]
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Pause after every judge call in milliseconds [default: 1000]
    #[arg(long)]
    pub call_interval_ms: Option<u64>,

    /// Wait before retrying a failed judge call in milliseconds [default: 5000]
    #[arg(long)]
    pub retry_delay_ms: Option<u64>,

    /// TOML file supplying defaults for the settings above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EvaluateArgs {
    /// The settings given on the command line
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            model: self.model.clone(),
            metrics: self.metrics.clone(),
            batch_size: self.batch_size,
            max_retries: self.max_retries,
            checkpoint_dir: self.checkpoint_dir.clone(),
            judge: PartialJudgeConfig {
                api_base: self.api_base.clone(),
                timeout_secs: self.timeout_secs,
            },
            pacing: PartialPacingConfig {
                call_interval_ms: self.call_interval_ms,
                retry_delay_ms: self.retry_delay_ms,
            },
        }
    }
}
