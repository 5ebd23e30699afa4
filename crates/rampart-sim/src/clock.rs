//! Fixed-timestep accumulator.
//!
//! Converts variable frame times into a whole number of simulation steps
//! plus an interpolation factor for rendering between the last two states.

use rampart_core::constants::{DT, MAX_SUBSTEPS};

/// Result of feeding one frame into the accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    /// Number of fixed steps to run this frame.
    pub steps: u32,
    /// Progress towards the next step, in [0, 1).
    pub alpha: f32,
}

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `frame_dt` seconds and return how many steps to run.
    ///
    /// At most `max_substeps` steps are returned; any whole steps beyond
    /// that are dropped so a long stall cannot snowball.
    pub fn advance(&mut self, frame_dt: f32) -> FrameSteps {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            self.accumulator %= self.step;
        }

        FrameSteps {
            steps,
            alpha: self.alpha(),
        }
    }

    /// Interpolation factor of the current remainder.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
