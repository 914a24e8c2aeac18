//! Task identifier generation
//!
//! Identifiers are random UUID v4 strings. Uniqueness is probabilistic: the
//! generator never looks at the stored collection.

use uuid::Uuid;

/// Source of fresh, opaque task identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier
    fn generate(&self) -> String;
}

/// Generates hyphenated UUID v4 strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
