//! Unseeded context drawing its master seed from OS entropy.

use crate::{EnvError, HotspotContext, SeededContext};
use rand::rngs::OsRng;
use rand::RngCore;

/// Context for unseeded runs.
///
/// The master seed comes from `OsRng`, so two runs differ, but the seed is
/// still reported by [`HotspotContext::seed`] and a run can be replayed with
/// a [`SeededContext`] built from it.
#[derive(Debug, Clone)]
pub struct EntropyContext {
    inner: SeededContext,
}

impl EntropyContext {
    /// Creates a new context seeded from the operating system.
    pub fn new() -> Result<Self, EnvError> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| EnvError::entropy(e.to_string()))?;

        Ok(Self {
            inner: SeededContext::new(u64::from_le_bytes(bytes)),
        })
    }
}

impl HotspotContext for EntropyContext {
    fn unit_f64(&mut self) -> f64 {
        self.inner.unit_f64()
    }

    fn below(&mut self, upper: usize) -> usize {
        self.inner.below(upper)
    }

    fn derive_seed(&self, stream: u64) -> u64 {
        self.inner.derive_seed(stream)
    }

    fn seed(&self) -> u64 {
        self.inner.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_context_replays_as_seeded() {
        let mut ctx = EntropyContext::new().unwrap();
        let mut replay = SeededContext::new(ctx.seed());

        for _ in 0..10 {
            assert_eq!(ctx.unit_f64(), replay.unit_f64());
        }
    }

    #[test]
    fn test_entropy_contexts_differ() {
        let ctx1 = EntropyContext::new().unwrap();
        let ctx2 = EntropyContext::new().unwrap();

        // 2^-64 chance of a false failure
        assert_ne!(ctx1.seed(), ctx2.seed());
    }
}
