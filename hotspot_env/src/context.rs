//! Core random-source trait shared by every simulation component.

/// The central interface for randomness.
///
/// Implementations own their RNG state; callers thread a `&mut` reference
/// through each operation that consumes randomness.
///
/// # Determinism
///
/// Two contexts built from the same master seed must produce the same
/// sequence of values for the same sequence of calls.
pub trait HotspotContext {
    /// Returns a uniform sample in `[0, 1)`.
    fn unit_f64(&mut self) -> f64;

    /// Returns a uniform index in `[0, upper)`.
    ///
    /// `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Derives a reproducible sub-seed for an independent random stream.
    ///
    /// Does not advance the context's own state, so adding a stream never
    /// shifts the values seen by other consumers.
    ///
    /// # Arguments
    /// * `stream` - A value to combine with the master seed
    fn derive_seed(&self, stream: u64) -> u64;

    /// Returns the master seed (for logging and replay).
    fn seed(&self) -> u64;
}
