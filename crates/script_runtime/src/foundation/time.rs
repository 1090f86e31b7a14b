//! Frame timing utilities
//!
//! The script update contract is driven by per-frame delta times supplied by
//! the host loop. [`FrameClock`] produces those deltas for a real-time loop;
//! tests and headless runs usually feed fixed deltas directly instead.

use std::time::Instant;

/// Per-frame clock for a host update loop
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock starting now
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by the wall time elapsed since the previous tick
    /// and return the new delta time in seconds.
    ///
    /// Call once per frame, before the scene update.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Advance the clock by a fixed delta, ignoring wall time.
    ///
    /// Useful for deterministic headless runs.
    pub fn tick_fixed(&mut self, delta_time: f32) -> f32 {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.last_frame = Instant::now();
        self.frame_count += 1;
        self.delta_time
    }

    /// Time since the last tick in seconds
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Accumulated time across all ticks in seconds
    #[must_use]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
