// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness source for every randomized routine in the engine.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let counter = rng.random_range(100..200);
        for _ in 0..counter {
            rng.random::<u32>();
        }
        StaticRandom { rng }
    }

    /// Reproducible stream, for tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        StaticRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next(&mut self) -> u64 {
        self.rng.random()
    }

    /// Uniform in [min_value, max_value). Returns `min_value` for an empty range.
    pub fn next_range(&mut self, min_value: u64, max_value: u64) -> u64 {
        if min_value >= max_value {
            return min_value;
        }
        self.rng.random_range(min_value..max_value)
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}
