//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, persistence, IDs, randomness). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod random;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use random::RandomSource;
