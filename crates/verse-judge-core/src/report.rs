//! Final report document and console summary

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::{EvalError, Result};
use crate::records::EvaluationRecord;
use crate::stats::{Statistics, StatisticsSummary};

/// Everything a run produces, as written to the output file
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub results: Vec<EvaluationRecord>,
    pub statistics: Statistics,
    pub config: ReportConfig,
}

impl EvaluationReport {
    /// Write the report as pretty-printed JSON, creating parent directories
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| EvalError::io_operation("create output dir", parent.display(), e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| EvalError::io_operation("write report", path.display(), e))?;
        Ok(())
    }
}

fn fmt_float(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{:.2}", v))
}

fn fmt_int<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn summary_lines(summary: &StatisticsSummary) -> [(&'static str, String); 6] {
    [
        ("mean", fmt_float(summary.mean)),
        ("median", fmt_float(summary.median)),
        ("std", fmt_float(summary.std)),
        ("min", fmt_int(summary.min)),
        ("max", fmt_int(summary.max)),
        ("count", summary.count.to_string()),
    ]
}

/// Render statistics for the terminal
pub fn format_statistics(statistics: &Statistics) -> String {
    let mut out = String::from("Evaluation statistics:\n");
    for (rubric, summary) in statistics.iter() {
        let _ = writeln!(out, "\n{}:", rubric);
        for (name, value) in summary_lines(summary) {
            let _ = writeln!(out, "  {}: {}", name, value);
        }
    }
    out
}
