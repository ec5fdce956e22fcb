// SPDX-License-Identifier: MPL-2.0
//! Simulated progress for the loading overlay.
//!
//! The generation endpoint gives no progress feedback, so the bar advances on
//! a timer and parks below [`CEILING_PERCENT`] until the response arrives.
//! Completion snaps it to 100 so the bar always finishes full.

/// Where the simulated bar stalls while waiting for the server.
pub const CEILING_PERCENT: f32 = 85.0;

/// How much one tick advances the bar.
const STEP_PERCENT: f32 = 1.5;

/// Simulated progress in percent, `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedProgress {
    percent: f32,
}

impl SimulatedProgress {
    pub fn new() -> Self {
        Self { percent: 0.0 }
    }

    #[must_use]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Advances one tick, clamped to the ceiling.
    pub fn tick(&mut self) {
        self.percent = (self.percent + STEP_PERCENT).min(CEILING_PERCENT);
    }

    /// Snaps to 100 on success.
    pub fn complete(&mut self) {
        self.percent = 100.0;
    }
}

impl Default for SimulatedProgress {
    fn default() -> Self {
        Self::new()
    }
}
