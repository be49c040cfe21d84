//! `verse-judge evaluate` command

use std::time::Instant;

use tracing::info;

use crate::cli::{Cli, EvaluateArgs, OutputFormat};
use verse_judge_core::batch::FileCheckpointSink;
use verse_judge_core::config::{PartialConfig, RunConfig};
use verse_judge_core::error::Result;
use verse_judge_core::evaluate::evaluate;
use verse_judge_core::judge::openai::ChatCompletionsJudge;
use verse_judge_core::pacing::ThreadPacer;
use verse_judge_core::records;
use verse_judge_core::report::format_statistics;
use verse_judge_core::trace_time;

/// Execute the evaluate command
pub fn execute(cli: &Cli, args: &EvaluateArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => PartialConfig::load(path)?,
        None => PartialConfig::default(),
    };

    let config = RunConfig::resolve(
        args.input_file.clone(),
        args.output_file.clone(),
        args.to_partial().or(file_config),
    )?;

    // Credentials are checked before any input is read
    let judge = ChatCompletionsJudge::from_env(&config.judge)?;

    let start = Instant::now();
    let items = records::load_items(&config.input_file)?;
    trace_time!(start, "load_items", count = items.len());

    let sink = FileCheckpointSink::new(config.checkpoint_dir.clone());
    let report = evaluate(&config, &items, judge, ThreadPacer, sink)?;

    report.write(&config.output_file)?;
    info!(path = %config.output_file.display(), "report written");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.statistics)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                print!("{}", format_statistics(&report.statistics));
                println!("\nResults saved to {}", config.output_file.display());
            }
        }
    }

    Ok(())
}
