//! Service context bundling all port trait objects.

use crate::ports::{Clock, FileSystem, IdGenerator, RandomSource};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests assemble a
/// context from in-memory doubles; production code uses [`Self::live`].
pub struct ServiceContext {
    /// Clock for record timestamps and export file names.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the history slot and import/export files.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for record ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Random source for the generator's draws.
    pub rng: Box<dyn RandomSource>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator, LiveRandom};

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator::new()),
            rng: Box::new(LiveRandom::new()),
        }
    }
}
