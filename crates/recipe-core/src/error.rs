//! Error types for the recipe timer

use thiserror::Error;

use crate::Seconds;

/// Timer errors
///
/// Only raised when a timer is configured for strict validation, or when a
/// quantity has to be turned into a `std::time::Duration`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TimerError {
    #[error("Invalid duration: {0} (must be finite and non-negative)")]
    InvalidDuration(Seconds),

    #[error("Invalid tick amount: {0} (must be finite and non-negative)")]
    InvalidTick(Seconds),

    #[error("Not representable as a duration: {0}")]
    NotRepresentable(Seconds),
}

/// Result type for timer operations
pub type TimerResult<T> = Result<T, TimerError>;
