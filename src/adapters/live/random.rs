//! Live adapter for the `RandomSource` port.

use rand::Rng;

use crate::ports::RandomSource;

/// Live random source backed by the thread-local RNG.
pub struct LiveRandom;

impl LiveRandom {
    /// Creates a new live random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LiveRandom {
    fn int_in_range(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}
