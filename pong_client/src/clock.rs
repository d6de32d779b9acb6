//! Frame timing

use std::time::{Duration, Instant};

use game_core::Config;

/// Measures time between frames and converts it to the simulation delta
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    previous: Instant,
    next_frame: Instant,
    frame_delay: Duration,
}

impl FrameClock {
    pub fn new(now: Instant, frame_delay: Duration) -> Self {
        Self {
            previous: now,
            next_frame: now,
            frame_delay,
        }
    }

    /// When the next frame should run
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Start a frame at `now`: returns the delta since the previous frame and
    /// schedules the next one a fixed delay later.
    pub fn tick(&mut self, now: Instant, config: &Config) -> i32 {
        let elapsed_ms = now.saturating_duration_since(self.previous).as_millis();
        self.previous = now;
        self.next_frame = now + self.frame_delay;
        config.delta_from_millis(u32::try_from(elapsed_ms).unwrap_or(u32::MAX))
    }
}
