//! Error types for the casting engine.

use thiserror::Error;

/// Errors raised while casting raw data against a schema.
///
/// Both variants indicate a schema or argument bug and are never downgraded
/// to soft failures by the layers above.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CastError {
    /// The raw value cannot be shaped into the declared descriptor.
    #[error("cannot cast {found} into {expected}")]
    TypeMismatch {
        /// Declared descriptor, rendered for humans.
        expected: String,
        /// Kind of the offending raw value.
        found: String,
    },

    /// A descriptor references an object kind missing from the registry.
    #[error("unknown object kind '{0}'")]
    UnknownKind(String),
}

impl CastError {
    /// Builds a `TypeMismatch` from display-able expected/found descriptions.
    pub fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
        CastError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Result type for casting operations.
pub type CastResult<T> = Result<T, CastError>;
