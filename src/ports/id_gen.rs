//! ID generator port for producing unique record identifiers.

/// Generates unique identifiers.
///
/// Abstracting ID generation lets tests substitute a predictable sequence
/// when asserting on stored records.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
