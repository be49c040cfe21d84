//! Batched evaluation with per-batch checkpoints
//!
//! Items are scored strictly in sequence: batch by batch, item by item,
//! rubric by rubric in request order, with one fixed pause after every judge
//! call. When a batch finishes its records are handed to a
//! [`CheckpointSink`] before the next batch starts. Checkpoints are never
//! read back by the run.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{EvalError, Result};
use crate::judge::Judge;
use crate::pacing::{Pacer, Pacing};
use crate::records::{EvaluationRecord, TranslationItem};
use crate::rubric::Rubric;
use crate::scoring::ScoringClient;
use crate::trace_time;

/// Receives each completed batch, tagged with the offset of its first item
pub trait CheckpointSink {
    fn persist(&mut self, offset: usize, records: &[EvaluationRecord]) -> Result<()>;
}

impl<S: CheckpointSink + ?Sized> CheckpointSink for &mut S {
    fn persist(&mut self, offset: usize, records: &[EvaluationRecord]) -> Result<()> {
        (**self).persist(offset, records)
    }
}

/// Writes `temp_results_{offset}.json` files into a directory
#[derive(Debug, Clone)]
pub struct FileCheckpointSink {
    dir: PathBuf,
}

impl FileCheckpointSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic file name for the batch starting at `offset`
    pub fn path_for(&self, offset: usize) -> PathBuf {
        self.dir.join(format!("temp_results_{}.json", offset))
    }
}

impl CheckpointSink for FileCheckpointSink {
    fn persist(&mut self, offset: usize, records: &[EvaluationRecord]) -> Result<()> {
        let path = self.path_for(offset);

        fs::create_dir_all(&self.dir)
            .map_err(|e| EvalError::io_operation("create checkpoint dir", self.dir.display(), e))?;
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&path, content)
            .map_err(|e| EvalError::io_operation("write checkpoint", path.display(), e))?;

        debug!(path = %path.display(), records = records.len(), "checkpoint written");
        Ok(())
    }
}

/// Drives a [`ScoringClient`] over the whole input
pub struct BatchOrchestrator<J, P, S> {
    scorer: ScoringClient<J, P>,
    sink: S,
    call_interval: Duration,
}

impl<J: Judge, P: Pacer, S: CheckpointSink> BatchOrchestrator<J, P, S> {
    pub fn new(scorer: ScoringClient<J, P>, sink: S, pacing: &Pacing) -> Self {
        Self {
            scorer,
            sink,
            call_interval: pacing.call_interval,
        }
    }

    /// Score every item on every rubric and return the records in input
    /// order.
    ///
    /// Unscorable pairs are recorded as absent scores. Only a checkpoint
    /// failure (or an invalid batch size) aborts the run.
    pub fn run(
        &mut self,
        items: &[TranslationItem],
        rubrics: &[Rubric],
        batch_size: usize,
        max_retries: u32,
    ) -> Result<Vec<EvaluationRecord>> {
        if batch_size == 0 {
            return Err(EvalError::invalid_value("batch size", "0 (must be at least 1)"));
        }

        let total_batches = items.len().div_ceil(batch_size);
        let mut results = Vec::with_capacity(items.len());

        for (index, batch) in items.chunks(batch_size).enumerate() {
            let offset = index * batch_size;
            let start = Instant::now();
            info!(
                batch = index + 1,
                total_batches,
                offset,
                items = batch.len(),
                "scoring batch"
            );

            let records = self.score_batch(batch, rubrics, max_retries);
            self.sink.persist(offset, &records)?;

            trace_time!(start, "score_batch", offset = offset);
            results.extend(records);
        }

        info!(items = results.len(), "evaluation complete");
        Ok(results)
    }

    fn score_batch(
        &self,
        batch: &[TranslationItem],
        rubrics: &[Rubric],
        max_retries: u32,
    ) -> Vec<EvaluationRecord> {
        batch
            .iter()
            .map(|item| {
                let mut record = EvaluationRecord::new(item);
                for &rubric in rubrics {
                    let score =
                        self.scorer
                            .score(&item.source, &item.translation, rubric, max_retries);
                    record.scores.insert(rubric, score);
                    self.scorer.pacer().pause(self.call_interval);
                }
                record
            })
            .collect()
    }
}
