//! `verse-judge rubrics` command

use crate::cli::{Cli, OutputFormat};
use verse_judge_core::error::Result;
use verse_judge_core::rubric::Rubric;

/// Execute the rubrics command
pub fn execute(cli: &Cli, show: Option<Rubric>) -> Result<()> {
    match show {
        Some(rubric) => show_template(cli, rubric),
        None => list(cli),
    }
}

fn list(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let names: Vec<&str> = Rubric::ALL.iter().map(|r| r.name()).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Human => {
            for rubric in Rubric::ALL {
                println!("{}", rubric);
            }
        }
    }
    Ok(())
}

fn show_template(cli: &Cli, rubric: Rubric) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": rubric.name(),
                "template": rubric.template(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", rubric.template());
        }
    }
    Ok(())
}
