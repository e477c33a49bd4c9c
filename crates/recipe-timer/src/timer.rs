//! Recipe timer - fixed duration, accumulated elapsed time, running flag

use std::fmt;

use recipe_core::{Seconds, TimerResult};

use crate::TimerConfig;

/// Lifecycle state of a timer, derived from its running flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerState {
    Stopped,
    Running,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerState::Stopped => f.write_str("stopped"),
            TimerState::Running => f.write_str("running"),
        }
    }
}

/// Countdown timer advanced by explicit ticks
///
/// INVARIANT: with non-negative inputs, `0 <= elapsed <= duration` always
/// holds and `duration` never changes after construction.
///
/// Reaching the duration does not stop the timer. A finished timer stays in
/// whatever state it was in and can be reset and started again.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeTimer {
    /// Target duration, fixed at construction
    duration: Seconds,
    /// Accumulated time, clamped to `duration`
    elapsed: Seconds,
    /// Whether ticks are currently applied
    running: bool,
    /// Validation policy
    config: TimerConfig,
}

impl RecipeTimer {
    /// Create a stopped timer with nothing elapsed
    ///
    /// Any duration is accepted, including zero (finished from the start)
    /// and negative values.
    pub fn new(duration: impl Into<Seconds>) -> Self {
        RecipeTimer {
            duration: duration.into(),
            elapsed: Seconds::ZERO,
            running: false,
            config: TimerConfig::default(),
        }
    }

    /// Create a timer with a custom configuration
    ///
    /// Fails only under [`crate::Validation::Strict`], for a negative or
    /// non-finite duration.
    pub fn with_config(duration: impl Into<Seconds>, config: TimerConfig) -> TimerResult<Self> {
        let duration = duration.into();
        config.validation.check_duration(duration)?;

        Ok(RecipeTimer {
            duration,
            elapsed: Seconds::ZERO,
            running: false,
            config,
        })
    }

    /// Start applying ticks. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(elapsed = %self.elapsed, duration = %self.duration, "timer started");
        }
        self.running = true;
    }

    /// Stop applying ticks. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(elapsed = %self.elapsed, duration = %self.duration, "timer stopped");
        }
        self.running = false;
    }

    /// Zero the elapsed time and stop, whatever the prior state
    pub fn reset(&mut self) {
        tracing::debug!(elapsed = %self.elapsed, state = %self.state(), "timer reset");
        self.elapsed = Seconds::ZERO;
        self.running = false;
    }

    /// Advance elapsed time by `seconds` if the timer is running
    ///
    /// Elapsed time is clamped to the duration. A stopped timer ignores the
    /// tick. Under strict validation a negative or non-finite amount is
    /// rejected before anything changes, running or not.
    pub fn tick(&mut self, seconds: impl Into<Seconds>) -> TimerResult<()> {
        let seconds = seconds.into();
        self.config.validation.check_tick(seconds)?;

        if !self.running {
            tracing::trace!(%seconds, "tick ignored, timer stopped");
            return Ok(());
        }

        let was_finished = self.is_finished();

        self.elapsed += seconds;
        if self.elapsed > self.duration {
            self.elapsed = self.duration;
        }

        tracing::trace!(%seconds, elapsed = %self.elapsed, duration = %self.duration, "tick");
        if !was_finished && self.is_finished() {
            tracing::debug!(duration = %self.duration, "timer finished");
        }

        Ok(())
    }

    /// True once elapsed time has reached the duration
    ///
    /// Independent of the running flag.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn duration(&self) -> Seconds {
        self.duration
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left until finished, never below zero
    pub fn remaining(&self) -> Seconds {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Fraction of the duration elapsed, in `[0, 1]`
    ///
    /// A timer whose duration is not positive is finished from
    /// construction and reports `1.0`. A NaN elapsed time (only reachable
    /// through a permissive NaN tick) reports `0.0`, matching
    /// `is_finished()` being false.
    pub fn progress(&self) -> f64 {
        let duration = self.duration.as_f64();
        if duration.is_nan() || duration <= 0.0 {
            return 1.0;
        }
        let ratio = self.elapsed.as_f64() / duration;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }
}
