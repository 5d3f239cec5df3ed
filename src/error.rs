//! Error types

use thiserror::Error;

/// Why a duration typed into the input was rejected.
///
/// Rejected input is never shown to the user; SetDuration simply ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("duration input is empty")]
    Empty,
    #[error("duration {0:?} is not a number")]
    NotANumber(String),
    #[error("duration {0:?} must be greater than zero")]
    NotPositive(String),
    #[error("duration {0:?} is too large")]
    OutOfRange(String),
}

/// Failures of the component host itself
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("failed to lock timer state: {0}")]
    LockPoisoned(String),
}
