//! Time sources for paced sampling.
//!
//! Paced generators (the Perlin trajectory loop) never touch
//! `std::time` directly. They are driven through the [`Clock`] trait so
//! the same loop can run against:
//! - the real wall clock, blocking the calling thread between samples
//! - a manual clock whose "sleep" just advances virtual time

use std::thread;
use std::time::{Duration, Instant};

/// A monotonic time source measured from the moment it was started.
pub trait Clock {
    /// Time elapsed since the clock started.
    fn elapsed(&self) -> Duration;

    /// Wait for `duration` before the next sample.
    fn sleep(&mut self, duration: Duration);

    /// Elapsed time in seconds.
    fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// A clock anchored to a real [`Instant`]; `sleep` blocks the thread.
#[derive(Debug, Clone)]
pub struct WallClock {
    /// The instant the clock started.
    epoch: Instant,

    /// Wall-clock time at epoch (RFC 3339 string).
    epoch_wall: String,
}

impl WallClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Wall-clock time at start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }
}

impl Clock for WallClock {
    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// A virtual clock. Time only moves when [`Clock::sleep`] or
/// [`ManualClock::advance`] is called, so paced loops become deterministic.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward without sampling.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}
