//! verse-judge core library
//!
//! Scores poem translations with an external LLM judge on three rubrics,
//! in checkpointed batches, and summarizes the results.

pub mod batch;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod judge;
pub mod logging;
pub mod pacing;
pub mod prompt;
pub mod records;
pub mod report;
pub mod rubric;
pub mod scoring;
pub mod stats;

#[cfg(test)]
mod test_helpers;
