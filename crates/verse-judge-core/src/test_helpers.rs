//! In-memory fakes for the judge, pacer and checkpoint seams, plus a log
//! capture for asserting on emitted events

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::batch::CheckpointSink;
use crate::error::{EvalError, Result};
use crate::judge::{Judge, TransportError};
use crate::pacing::Pacer;
use crate::records::EvaluationRecord;

type Scripted = std::result::Result<&'static str, &'static str>;

/// Replays scripted answers; `Err` entries become transport failures
#[derive(Default)]
pub struct ScriptedJudge {
    script: RefCell<VecDeque<Scripted>>,
    fallback: Option<Scripted>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedJudge {
    /// Answer with `script` in order; panics if asked for more
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Give the same answer forever
    pub fn repeating(answer: Scripted) -> Self {
        Self {
            fallback: Some(answer),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Judge for ScriptedJudge {
    fn send(&self, prompt: &str) -> std::result::Result<String, TransportError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        let next = self
            .script
            .borrow_mut()
            .pop_front()
            .or(self.fallback)
            .expect("scripted judge ran out of answers");
        next.map(str::to_string)
            .map_err(|e| TransportError::Request(e.to_string()))
    }
}

/// Records requested pauses instead of sleeping
#[derive(Default)]
pub struct RecordingPacer {
    pauses: RefCell<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}

/// Keeps checkpoints in memory, optionally failing on the n-th write
#[derive(Default)]
pub struct MemorySink {
    pub checkpoints: Vec<(usize, Vec<EvaluationRecord>)>,
    fail_at: Option<usize>,
    writes: usize,
}

impl MemorySink {
    pub fn failing_at(write: usize) -> Self {
        Self {
            fail_at: Some(write),
            ..Default::default()
        }
    }
}

impl CheckpointSink for MemorySink {
    fn persist(&mut self, offset: usize, records: &[EvaluationRecord]) -> Result<()> {
        let write = self.writes;
        self.writes += 1;
        if self.fail_at == Some(write) {
            return Err(EvalError::io_operation(
                "write checkpoint",
                "memory",
                "injected failure",
            ));
        }
        self.checkpoints.push((offset, records.to_vec()));
        Ok(())
    }
}

/// Collects JSON-formatted log lines emitted on the current thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's events into a fresh capture until the guard drops
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(tracing::Level::DEBUG)
            .json()
            .finish();
        (capture, tracing::subscriber::set_default(subscriber))
    }

    /// Parsed events at `level` (e.g. "WARN"), in emission order
    pub fn events_at(&self, level: &str) -> Vec<serde_json::Value> {
        let bytes = self.buf.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
            .filter(|event| event["level"] == level)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
