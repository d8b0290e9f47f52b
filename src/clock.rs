//! Monotonic timing.

use std::time::Instant;

/// Opaque monotonic timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

pub fn now() -> Timestamp {
    Timestamp(Instant::now())
}

/// Seconds elapsed since `start`.
pub fn elapsed(start: Timestamp) -> f64 {
    start.0.elapsed().as_secs_f64()
}

/// A start/end pair captured around one timed run.
#[derive(Debug, Clone, Copy)]
pub struct TimingSample {
    start: Timestamp,
    end: Timestamp,
}

impl TimingSample {
    /// Captures the end timestamp now, closing the sample opened at `start`.
    pub fn finish(start: Timestamp) -> Self {
        Self { start, end: now() }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.end.0.duration_since(self.start.0).as_secs_f64()
    }
}
