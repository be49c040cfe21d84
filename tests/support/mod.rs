use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Address nothing listens on; connections are refused immediately
pub const UNREACHABLE_API_BASE: &str = "http://127.0.0.1:9";

/// Get a Command for verse-judge with a clean judge environment
pub fn verse_judge() -> Command {
    let mut cmd = cargo_bin_cmd!("verse-judge");
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("VERSE_JUDGE_API_KEY")
        .env_remove("VERSE_JUDGE_MODEL")
        .env_remove("VERSE_JUDGE_API_BASE")
        .env_remove("VERSE_JUDGE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a JSONL input file with one `{src, hyp}` record per pair
pub fn write_input(dir: &Path, pairs: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("poems.jsonl");
    let content: String = pairs
        .iter()
        .map(|(src, hyp)| format!("{}\n", serde_json::json!({ "src": src, "hyp": hyp })))
        .collect();
    fs::write(&path, content).unwrap();
    path
}

/// An evaluate command against a judge that never answers, with pauses off
#[allow(dead_code)]
pub fn evaluate_unreachable(input: &Path, output: &Path) -> Command {
    let mut cmd = verse_judge();
    cmd.env("OPENAI_API_KEY", "test-key")
        .arg("evaluate")
        .arg("--input-file")
        .arg(input)
        .arg("--output-file")
        .arg(output)
        .args([
            "--api-base",
            UNREACHABLE_API_BASE,
            "--max-retries",
            "2",
            "--timeout-secs",
            "5",
            "--call-interval-ms",
            "0",
            "--retry-delay-ms",
            "0",
        ]);
    cmd
}

/// Parse a JSON file written by the binary
#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
