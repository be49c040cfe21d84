//! Input items and evaluation records
//!
//! Input is JSONL with one translation per line: `src` holds the source poem,
//! `hyp` the candidate translation. Missing or `null` fields read as empty
//! strings, other non-string values keep their JSON text, and unknown fields
//! are ignored.

use std::fs;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{EvalError, Result};
use crate::rubric::Rubric;
use crate::scoring::ScoreResult;

/// One (source, translation) pair; identified only by its input position
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationItem {
    #[serde(rename = "src", default, deserialize_with = "lenient_text")]
    pub source: String,
    #[serde(rename = "hyp", default, deserialize_with = "lenient_text")]
    pub translation: String,
}

/// Read a text field, tolerating `null` and non-string JSON values
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

impl TranslationItem {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }
}

/// Scores keyed by rubric, in the order the rubrics were requested.
///
/// Serializes as a JSON object `{ "beauty_of_form": 4, ... }` with `null`
/// for unscorable pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubricScores(Vec<(Rubric, ScoreResult)>);

impl RubricScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for `rubric`, replacing any earlier entry
    pub fn insert(&mut self, rubric: Rubric, score: ScoreResult) {
        match self.0.iter_mut().find(|(r, _)| *r == rubric) {
            Some(entry) => entry.1 = score,
            None => self.0.push((rubric, score)),
        }
    }

    /// `None` if the rubric was never scored, `Some(None)` if it was
    /// unscorable
    pub fn get(&self, rubric: Rubric) -> Option<ScoreResult> {
        self.0.iter().find(|(r, _)| *r == rubric).map(|(_, s)| *s)
    }

    pub fn contains(&self, rubric: Rubric) -> bool {
        self.get(rubric).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rubric, ScoreResult)> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for RubricScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rubric, score) in &self.0 {
            map.serialize_entry(rubric.name(), score)?;
        }
        map.end()
    }
}

/// Result of scoring one item on every requested rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationRecord {
    pub source: String,
    pub translation: String,
    pub scores: RubricScores,
}

impl EvaluationRecord {
    pub fn new(item: &TranslationItem) -> Self {
        Self {
            source: item.source.clone(),
            translation: item.translation.clone(),
            scores: RubricScores::new(),
        }
    }
}

/// Parse JSONL content. Blank lines are skipped; `path` only labels errors.
pub fn parse_items(content: &str, path: &Path) -> Result<Vec<TranslationItem>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<TranslationItem>(line).map_err(|e| EvalError::InvalidRecord {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Load translation items from a JSONL file
pub fn load_items(path: &Path) -> Result<Vec<TranslationItem>> {
    if !path.exists() {
        return Err(EvalError::not_found("input file", path.display()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| EvalError::io_operation("read input", path.display(), e))?;
    let items = parse_items(&content, path)?;

    debug!(path = %path.display(), count = items.len(), "loaded input");
    Ok(items)
}
