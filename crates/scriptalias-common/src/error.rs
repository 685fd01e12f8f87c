//! Errors raised by alias generators.

use thiserror::Error;

/// The only class of error an alias generator recognizes.
///
/// Generators never fail halfway through: the argument check happens before
/// any text reaches the writer, so an `Err` means nothing was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A required argument was absent or not acceptable to this generator.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl GenerateError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Error for an alias that was not supplied at all.
    pub fn missing(name: &'static str) -> Self {
        Self::invalid_argument(name, "value cannot be null")
    }
}
