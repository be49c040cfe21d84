//! CLI argument parsing for verse-judge
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};

use verse_judge_core::rubric::Rubric;

pub use args::EvaluateArgs;
pub use output::OutputFormat;
use parse::parse_rubric;

/// Score poem translations with an LLM judge
#[derive(Parser, Debug)]
#[command(name = "verse-judge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log every judge call
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every translation in a JSONL file and write a report
    Evaluate(EvaluateArgs),

    /// List rubrics or print one rubric's prompt template
    Rubrics {
        /// Rubric whose template to print
        #[arg(long, value_parser = parse_rubric)]
        show: Option<Rubric>,
    },
}
