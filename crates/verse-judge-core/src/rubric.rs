//! Rubric catalog
//!
//! The three scoring dimensions form a closed set. Each rubric owns one
//! immutable prompt template, stored as a text file next to this module and
//! embedded at compile time so its whitespace reaches the judge untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

const BEAUTY_OF_FORM: &str = include_str!("rubric/templates/beauty_of_form.txt");
const BEAUTY_OF_MEANING: &str = include_str!("rubric/templates/beauty_of_meaning.txt");
const BEAUTY_OF_SOUND: &str = include_str!("rubric/templates/beauty_of_sound.txt");

/// A scoring dimension applied to every translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rubric {
    /// Structure, line alignment and balanced phrasing
    BeautyOfForm,
    /// Themes, emotions, imagery and atmosphere
    BeautyOfMeaning,
    /// Rhyme, meter and rhythm
    BeautyOfSound,
}

impl Rubric {
    /// Every rubric, in catalog order
    pub const ALL: [Rubric; 3] = [
        Rubric::BeautyOfForm,
        Rubric::BeautyOfMeaning,
        Rubric::BeautyOfSound,
    ];

    /// Wire name used in configuration, reports and checkpoints
    pub fn name(self) -> &'static str {
        match self {
            Rubric::BeautyOfForm => "beauty_of_form",
            Rubric::BeautyOfMeaning => "beauty_of_meaning",
            Rubric::BeautyOfSound => "beauty_of_sound",
        }
    }

    /// Prompt template with `{source}`, `{translation}` and `{score}` slots
    pub fn template(self) -> &'static str {
        match self {
            Rubric::BeautyOfForm => BEAUTY_OF_FORM,
            Rubric::BeautyOfMeaning => BEAUTY_OF_MEANING,
            Rubric::BeautyOfSound => BEAUTY_OF_SOUND,
        }
    }

    /// Comma-separated list of every wire name, for error messages
    pub fn supported_names() -> String {
        Rubric::ALL
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Rubric {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rubric::ALL
            .into_iter()
            .find(|r| r.name() == s.trim())
            .ok_or_else(|| EvalError::UnknownRubric {
                name: s.to_string(),
                supported: Rubric::supported_names(),
            })
    }
}

impl fmt::Display for Rubric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collapse repeated rubrics, keeping the first occurrence of each.
pub fn dedup_rubrics(rubrics: &[Rubric]) -> Vec<Rubric> {
    let mut seen = Vec::with_capacity(rubrics.len());
    for rubric in rubrics {
        if !seen.contains(rubric) {
            seen.push(*rubric);
        }
    }
    seen
}
