//! Simulated progress curve

use rand::Rng;

use super::state::PROGRESS_CEILING;

/// Decelerating random walk toward [`PROGRESS_CEILING`].
///
/// Each step adds `u * (100 - progress) / 10` for a uniform `u` in `[0, 1)`,
/// then clamps to the ceiling, so steps shrink as the bar fills.
#[derive(Debug)]
pub struct ProgressSimulator<R> {
    progress: f64,
    rng: R,
}

impl<R: Rng> ProgressSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { progress: 0.0, rng }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Advance one tick and return the new value.
    pub fn step(&mut self) -> f64 {
        let sample: f64 = self.rng.gen();
        let increment = sample * (100.0 - self.progress) / 10.0;
        self.progress = (self.progress + increment).min(PROGRESS_CEILING);
        self.progress
    }

    /// Jump straight to `value`; used when the real load completes.
    pub fn finish(&mut self, value: f64) {
        self.progress = self.progress.max(value);
    }
}
