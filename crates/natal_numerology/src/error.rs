//! Error types for numerology computations.

/// Errors from numerology computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Letter system name not recognized.
    #[error("unsupported letter system: {0}")]
    UnsupportedLetterSystem(String),
    /// Date cannot be reduced (year before 1 CE).
    #[error("invalid date for numerology: {0}")]
    InvalidDate(String),
}
