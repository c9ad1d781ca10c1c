//! Fixed timestep accumulator
//!
//! Display refresh feeds in variable frame times; the simulation consumes
//! them in whole ticks so its rate never depends on the refresh rate.

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Tick length in milliseconds
    step_ms: f64,
    accumulator_ms: f64,
}

impl FixedTimestep {
    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms,
            accumulator_ms: 0.0,
        }
    }

    /// Add elapsed frame time and return how many ticks to run now.
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned; any backlog beyond that is
    /// dropped to avoid a spiral of death after a long stall.
    pub fn accumulate(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator_ms += elapsed_ms;
        }
        let cap = self.step_ms * MAX_SUBSTEPS as f64;
        if self.accumulator_ms > cap {
            self.accumulator_ms = cap;
        }
        let steps = (self.accumulator_ms / self.step_ms).floor() as u32;
        self.accumulator_ms -= steps as f64 * self.step_ms;
        steps
    }

    /// Discard pending time (used when the simulation stops)
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}
