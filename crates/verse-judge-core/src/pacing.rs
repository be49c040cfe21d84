//! Fixed pauses between judge calls
//!
//! Rate limiting is two fixed pauses: one after every judge call and one
//! before retrying a failed transport. Both go through [`Pacer`] so
//! the run loop can be driven without sleeping.

use std::thread;
use std::time::Duration;

/// Default pause after every judge call
pub const DEFAULT_CALL_INTERVAL_MS: u64 = 1_000;

/// Default delay before retrying after a transport failure
pub const DEFAULT_RETRY_DELAY_MS: u64 = 5_000;

/// Pause durations applied by the scoring loop and the batch runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause inserted after every judge call
    pub call_interval: Duration,
    /// Wait before the next attempt when a judge call fails in transport
    pub retry_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            call_interval: Duration::from_millis(DEFAULT_CALL_INTERVAL_MS),
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl Pacing {
    pub fn from_millis(call_interval_ms: u64, retry_delay_ms: u64) -> Self {
        Self {
            call_interval: Duration::from_millis(call_interval_ms),
            retry_delay: Duration::from_millis(retry_delay_ms),
        }
    }

    /// No pauses at all
    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }
}

/// Something that can block the current thread for a while
pub trait Pacer {
    fn pause(&self, duration: Duration);
}

/// Sleeps the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &P {
    fn pause(&self, duration: Duration) {
        (**self).pause(duration)
    }
}
