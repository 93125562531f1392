//! Time sources and tick pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic milliseconds since some fixed origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

#[derive(Clone, Copy, Debug)]
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

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Caps the loop at a fixed tick rate by sleeping off whatever is left of
/// each tick period. This is the loop's only suspension point.
#[derive(Clone, Copy, Debug)]
pub struct FrameLimiter {
    period: Duration,
    tick_start: Instant,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            period: Self::period_for(tick_rate),
            tick_start: Instant::now(),
        }
    }

    /// Length of one tick at `tick_rate` ticks per second.
    pub fn period_for(tick_rate: u32) -> Duration {
        Duration::from_secs(1) / tick_rate.max(1)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn begin_tick(&mut self) {
        self.tick_start = Instant::now();
    }

    /// How long `wait` would sleep given `elapsed` time spent in the tick.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.period.saturating_sub(elapsed)
    }

    pub fn wait(&self) {
        let remaining = self.remaining(self.tick_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}
