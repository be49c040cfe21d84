//! Retry-safe score extraction
//!
//! One (item, rubric) pair is scored by a bounded loop. Each attempt ends in
//! one of three outcomes:
//!
//! - a valid score, which ends the loop;
//! - an invalid answer (not an integer, or outside 1..=5), retried at once;
//! - a transport failure, retried after the configured delay unless it was
//!   the last attempt.
//!
//! When the budget runs out the pair is recorded as unscorable and a warning
//! is logged. Nothing here returns an error: a bad answer for one pair never
//! stops the run.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::judge::{Judge, TransportError};
use crate::pacing::{Pacer, Pacing};
use crate::prompt;
use crate::rubric::Rubric;

/// A judge score, guaranteed to lie in `Score::MIN..=Score::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Accept `value` only if it is within range
    pub fn new(value: i64) -> Option<Score> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Score)
    }

    /// Interpret raw judge output: surrounding whitespace is ignored, the rest
    /// must be a plain integer in range.
    pub fn parse(raw: &str) -> Option<Score> {
        raw.trim().parse::<i64>().ok().and_then(Score::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A score, or `None` when no valid score was obtained after all attempts
pub type ScoreResult = Option<Score>;

/// Outcome of a single judge attempt
#[derive(Debug)]
enum Attempt {
    Valid(Score),
    Invalid(String),
    Transport(TransportError),
}

/// Scores (source, translation) pairs through a [`Judge`]
pub struct ScoringClient<J, P> {
    judge: J,
    pacer: P,
    retry_delay: Duration,
}

impl<J: Judge, P: Pacer> ScoringClient<J, P> {
    pub fn new(judge: J, pacer: P, pacing: &Pacing) -> Self {
        Self {
            judge,
            pacer,
            retry_delay: pacing.retry_delay,
        }
    }

    /// The pacer shared with the batch runner for inter-call pauses
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Score one translation on one rubric, making at most `max_retries`
    /// judge calls.
    pub fn score(
        &self,
        source: &str,
        translation: &str,
        rubric: Rubric,
        max_retries: u32,
    ) -> ScoreResult {
        let prompt = prompt::build(rubric, source, translation);

        for attempt in 1..=max_retries {
            let is_last = attempt == max_retries;

            match self.attempt(&prompt) {
                Attempt::Valid(score) => {
                    debug!(rubric = %rubric, attempt, score = score.value(), "scored");
                    return Some(score);
                }
                Attempt::Invalid(raw) => {
                    warn!(
                        rubric = %rubric,
                        attempt,
                        max_retries,
                        response = %raw,
                        "judge answer is not a score in 1..=5"
                    );
                }
                Attempt::Transport(err) => {
                    warn!(
                        rubric = %rubric,
                        attempt,
                        max_retries,
                        error = %err,
                        "judge call failed"
                    );
                    if !is_last {
                        self.pacer.pause(self.retry_delay);
                    }
                }
            }
        }

        warn!(
            rubric = %rubric,
            max_retries,
            "no valid score after all attempts; recording as unscorable"
        );
        None
    }

    fn attempt(&self, prompt: &str) -> Attempt {
        match self.judge.send(prompt) {
            Ok(raw) => match Score::parse(&raw) {
                Some(score) => Attempt::Valid(score),
                None => Attempt::Invalid(raw.trim().to_string()),
            },
            Err(err) => Attempt::Transport(err),
        }
    }
}
