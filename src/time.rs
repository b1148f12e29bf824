//! Monotonic time source for frame pacing.
//!
//! The engine only needs a millisecond uptime counter; abstracting it behind
//! a trait keeps frame-step math deterministic in tests, where a scripted
//! clock replaces the real one.

use std::time::Instant;

/// A monotonic millisecond counter.
pub trait Clock {
    /// Milliseconds elapsed since some fixed origin. Must never decrease.
    fn uptime_millis(&self) -> u64;
}

/// The default [`Clock`], counting from its own creation via
/// [`std::time::Instant`].
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn uptime_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
