//! Pure identifier core: check digit computation and random generation.
//!
//! Nothing here touches the history store; the generator's only external
//! input is the [`RandomSource`](crate::ports::RandomSource) port.

pub mod checksum;
pub mod generator;

pub use checksum::check_digit;
pub use generator::{generate, GeneratedHkid};

use thiserror::Error;

/// Errors from the identifier core.
#[derive(Debug, Error)]
pub enum HkidError {
    /// The letter or number part violates the checksum preconditions.
    #[error("invalid HKID format: {0}")]
    InvalidFormat(String),
}
