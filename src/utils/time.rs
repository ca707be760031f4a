//! Fixed-rate tick scheduling for the single-threaded advance-and-render loop.

use std::time::Duration;

/// Interactive positioning rate.
pub const INTERACTIVE_HZ: u32 = 60;

/// Reduced rate used when every tick performs a blocking capture/export.
pub const CAPTURE_HZ: u32 = 10;

/// Accumulates elapsed time and yields the number of due ticks, so a host
/// loop can invoke the stage at a fixed rate regardless of how often it is
/// polled. There is no backpressure: a slow capture or export simply lowers
/// the effective rate.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: Duration,
    accumulator: Duration,
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new(INTERACTIVE_HZ)
    }
}

impl TickPacer {
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feeds elapsed wall-clock time; returns how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
        }
        due
    }

    /// Drops any accumulated backlog, e.g. after a long blocking export.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
