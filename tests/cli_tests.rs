//! Integration tests for the verse-judge CLI surface
//!
//! These tests run the binary and check help, the rubric catalog and the
//! exit codes of runs that fail before any judge call is made.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{evaluate_unreachable, verse_judge, write_input, UNREACHABLE_API_BASE};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    verse_judge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: verse-judge"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("rubrics"));
}

#[test]
fn test_version_flag() {
    verse_judge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("verse-judge"));
}

#[test]
fn test_evaluate_help_lists_flags() {
    verse_judge()
        .args(["evaluate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--input-file"))
        .stdout(predicate::str::contains("--metrics"))
        .stdout(predicate::str::contains("--batch-size"))
        .stdout(predicate::str::contains("--max-retries"));
}

// ============================================================================
// Rubric catalog
// ============================================================================

#[test]
fn test_rubrics_lists_all_names_in_order() {
    verse_judge()
        .arg("rubrics")
        .assert()
        .success()
        .stdout("beauty_of_form\nbeauty_of_meaning\nbeauty_of_sound\n");
}

#[test]
fn test_rubrics_json_output() {
    let output = verse_judge()
        .args(["--format", "json", "rubrics"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        names,
        ["beauty_of_form", "beauty_of_meaning", "beauty_of_sound"]
    );
}

#[test]
fn test_rubrics_show_prints_template() {
    verse_judge()
        .args(["rubrics", "--show", "beauty_of_sound"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{source}"))
        .stdout(predicate::str::contains("{translation}"));
}

#[test]
fn test_rubrics_show_json() {
    let output = verse_judge()
        .args(["rubrics", "--show", "beauty_of_form", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "beauty_of_form");
    assert!(json["template"].as_str().unwrap().contains("{source}"));
}

// ============================================================================
// Usage errors (exit code 2)
// ============================================================================

#[test]
fn test_unknown_rubric_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("静夜思", "Quiet Night Thought")]);

    verse_judge()
        .env("OPENAI_API_KEY", "test-key")
        .arg("evaluate")
        .arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(dir.path().join("report.json"))
        .args(["--metrics", "beauty_of_rhyme"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("beauty_of_rhyme"));

    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_unknown_rubric_json_envelope() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("a", "b")]);

    let output = verse_judge()
        .env("OPENAI_API_KEY", "test-key")
        .args(["--format", "json", "evaluate"])
        .arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(dir.path().join("report.json"))
        .args(["--metrics", "beauty_of_rhyme"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_missing_api_key_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("a", "b")]);

    verse_judge()
        .arg("evaluate")
        .arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(dir.path().join("report.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));

    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_zero_batch_size_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("a", "b")]);

    evaluate_unreachable(&input, &dir.path().join("report.json"))
        .args(["--batch-size", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("batch"));
}

#[test]
fn test_zero_timeout_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("a", "b")]);

    verse_judge()
        .env("OPENAI_API_KEY", "test-key")
        .arg("evaluate")
        .arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(dir.path().join("report.json"))
        .args(["--api-base", UNREACHABLE_API_BASE, "--timeout-secs", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("judge timeout"));

    assert!(!dir.path().join("report.json").exists());
    assert!(!dir.path().join("temp_results_0.json").exists());
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &[("a", "b")]);
    let config = dir.path().join("judge.toml");
    fs::write(&config, "temperature = 0.7\n").unwrap();

    evaluate_unreachable(&input, &dir.path().join("report.json"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}

// ============================================================================
// Data errors (exit code 3)
// ============================================================================

#[test]
fn test_missing_input_is_data_error() {
    let dir = tempdir().unwrap();

    evaluate_unreachable(
        &dir.path().join("missing.jsonl"),
        &dir.path().join("report.json"),
    )
    .assert()
    .code(3)
    .stderr(predicate::str::contains("missing.jsonl"));
}

#[test]
fn test_malformed_input_line_is_data_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("poems.jsonl");
    fs::write(&input, "{\"src\": \"a\", \"hyp\": \"b\"}\n{not json\n").unwrap();

    evaluate_unreachable(&input, &dir.path().join("report.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));

    assert!(!dir.path().join("temp_results_0.json").exists());
}
