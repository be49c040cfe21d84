//! verse-judge - LLM-judged scoring of poem translations
//!
//! Scores each translation on form, meaning and sound with an external
//! judge model, checkpoints every batch, and writes a JSON report with
//! per-rubric statistics.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use verse_judge_core::error::{EvalError, ExitCode as JudgeExitCode};
use verse_judge_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before we can inspect
            // `Cli.format`. If JSON was requested, emit a structured envelope.
            if argv_format_json {
                let eval_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => EvalError::UsageError(err.to_string()),
                };

                eprintln!("{}", eval_error.to_json());
                return ExitCode::from(eval_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli) {
        Ok(()) => {
            tracing::debug!(elapsed = ?start.elapsed(), "done");
            ExitCode::from(JudgeExitCode::Success as u8)
        }
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
