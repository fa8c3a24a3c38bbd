//! Pacing between leaf events
//!
//! The interactive binary sleeps after each leaf event so the narration
//! reads like an animation. Tests run the same traversals with a no-op
//! pacer, so the full cycle finishes without wall-clock cost.

use std::thread;
use std::time::Duration;

/// Strategy for the pause after each leaf event.
pub trait Pacer {
    fn pause(&self);
}

/// Real-time pacing: blocks the simulation thread for a fixed delay.
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Pacer for SleepPacer {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}

/// No pacing at all.
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&self) {}
}
