//! Timer configuration

use recipe_core::{Seconds, TimerError, TimerResult};

/// How a timer treats negative or non-finite inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Accept every duration and tick amount as given
    #[default]
    Permissive,
    /// Reject negative and non-finite durations and tick amounts
    Strict,
}

impl Validation {
    /// Check a duration at construction time
    pub fn check_duration(self, duration: Seconds) -> TimerResult<()> {
        if self == Validation::Strict && !duration.is_valid() {
            tracing::warn!(%duration, "rejected timer duration");
            return Err(TimerError::InvalidDuration(duration));
        }
        Ok(())
    }

    /// Check a tick amount before it is applied
    pub fn check_tick(self, seconds: Seconds) -> TimerResult<()> {
        if self == Validation::Strict && !seconds.is_valid() {
            tracing::warn!(%seconds, "rejected tick amount");
            return Err(TimerError::InvalidTick(seconds));
        }
        Ok(())
    }
}

/// Timer configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerConfig {
    /// Input validation policy
    pub validation: Validation,
}

impl TimerConfig {
    /// Hardened preset: invalid durations and ticks become errors
    pub fn strict() -> Self {
        TimerConfig {
            validation: Validation::Strict,
        }
    }

    /// Accept-and-clamp preset, same as `Default`
    pub fn permissive() -> Self {
        TimerConfig {
            validation: Validation::Permissive,
        }
    }
}
