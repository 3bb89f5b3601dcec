//! Error types for setguard

use thiserror::Error;

/// Result type alias for setguard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for setguard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// A validator rejected a candidate value. The message is meant for the
    /// end user and names what was expected and what was seen.
    #[error("{0}")]
    Validation(String),

    /// A validator that depends on contextual data was evaluated before
    /// `set_context` supplied it.
    #[error("Validator evaluated without context: {0}")]
    MissingContext(String),

    // -------------------------------------------------------------------------
    // Concurrency Errors
    // -------------------------------------------------------------------------
    #[error("Internal lock was poisoned - possible thread panic")]
    LockPoisoned,
}

impl Error {
    /// Check if this is a value-rejection error (as opposed to misuse of the
    /// validator lifecycle or an internal failure)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
