//! Random source port for the generator's draws.

/// Provides uniform random integers.
///
/// Abstracting randomness lets tests supply deterministic draw sequences
/// and verify exact generated identifiers end to end.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed integer in the inclusive range
    /// `[min, max]`.
    fn int_in_range(&self, min: u32, max: u32) -> u32;
}
