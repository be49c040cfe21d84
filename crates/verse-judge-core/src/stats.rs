//! Per-rubric summary statistics over the scores that were obtained

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::records::EvaluationRecord;
use crate::rubric::Rubric;

/// Summary of one rubric's scores. Everything but `count` is `None` when no
/// record has a score for the rubric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Population standard deviation
    pub std: Option<f64>,
    pub min: Option<u8>,
    pub max: Option<u8>,
    pub count: usize,
}

impl StatisticsSummary {
    /// Summarize a set of scores
    pub fn from_scores(scores: &[u8]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }

        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let mean = sorted.iter().map(|&s| f64::from(s)).sum::<f64>() / count as f64;
        let variance = sorted
            .iter()
            .map(|&s| (f64::from(s) - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        } else {
            f64::from(sorted[mid])
        };

        Self {
            mean: Some(mean),
            median: Some(median),
            std: Some(variance.sqrt()),
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            count,
        }
    }
}

/// Summaries keyed by rubric, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics(Vec<(Rubric, StatisticsSummary)>);

impl Statistics {
    pub fn get(&self, rubric: Rubric) -> Option<&StatisticsSummary> {
        self.0.iter().find(|(r, _)| *r == rubric).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rubric, &StatisticsSummary)> + '_ {
        self.0.iter().map(|(r, s)| (*r, s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rubric, summary) in &self.0 {
            map.serialize_entry(rubric.name(), summary)?;
        }
        map.end()
    }
}

/// Reduce records to one summary per requested rubric.
pub fn summarize(records: &[EvaluationRecord], rubrics: &[Rubric]) -> Statistics {
    let summaries = rubrics
        .iter()
        .map(|&rubric| {
            let scores: Vec<u8> = records
                .iter()
                .filter_map(|record| record.scores.get(rubric).flatten())
                .map(|score| score.value())
                .collect();
            (rubric, StatisticsSummary::from_scores(&scores))
        })
        .collect();

    Statistics(summaries)
}
