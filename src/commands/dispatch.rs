//! Command dispatch logic for verse-judge

use crate::cli::{Cli, Commands};
use crate::commands;
use verse_judge_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(cli, args),
        Commands::Rubrics { show } => commands::rubrics::execute(cli, *show),
    }
}
