//! Deterministic context backed by a seeded ChaCha8 RNG.

use crate::HotspotContext;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Multiplier used to spread stream ids across the seed space.
const STREAM_MIX: u64 = 0x517cc1b727220a95;

/// Seeded context for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededContext {
    /// Master seed for this run
    seed: u64,

    /// Main RNG cursor
    rng: ChaCha8Rng,
}

impl SeededContext {
    /// Creates a new context from a master seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl HotspotContext for SeededContext {
    fn unit_f64(&mut self) -> f64 {
        // gen::<f64>() samples the half-open interval [0, 1)
        self.rng.gen::<f64>()
    }

    fn below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn derive_seed(&self, stream: u64) -> u64 {
        self.seed.wrapping_mul(STREAM_MIX) ^ stream.wrapping_mul(0x9e3779b97f4a7c15)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
