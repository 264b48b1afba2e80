//! Live adapters backed by the real system.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod random;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use id_gen::LiveIdGenerator;
pub use random::LiveRandom;
