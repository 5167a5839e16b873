use std::time::Duration;

use crate::constants::*;

/// Fixed-timestep accumulator.
///
/// Real frame time goes in, a whole number of simulation ticks comes out.
/// Long frames are clamped so a stall never turns into a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
    max_delta: Duration,
}

impl FixedStep {
    pub fn new(tick_rate: u32, max_steps: u32) -> Self {
        FixedStep {
            step: Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1))),
            accumulator: Duration::ZERO,
            max_steps: max_steps.max(1),
            max_delta: Duration::from_secs_f32(MAX_FRAME_DELTA_SECS),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Adds one frame's elapsed time and returns how many ticks to run.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(self.max_delta);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.step {
            tracing::trace!(dropped = ?self.accumulator, "simulation behind, dropping time");
            self.accumulator = Duration::ZERO;
        }
        steps
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_RATE, MAX_TICKS_PER_FRAME)
    }
}
