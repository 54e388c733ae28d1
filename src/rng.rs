//! Seedable pseudo-random source threaded through every generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws.
pub trait RandomSource {
    /// Returns a value in `[min, max)`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// A replayable random source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source that always replays the same sequence for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.rng.random::<f64>()
    }
}
