//! Time quantity for the recipe timer
//!
//! Time here is never read from a clock. It is a caller-supplied amount of
//! seconds, kept as `f64` so that whole and fractional ticks both work.
//! Negative and non-finite values are representable on purpose; rejecting
//! them is a timer policy, not a property of the quantity.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::time::Duration;

use crate::{TimerError, TimerResult};

/// An amount of time in seconds
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(pub f64);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0.0);

    #[inline]
    pub fn new(secs: f64) -> Self {
        Seconds(secs)
    }

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Seconds(millis as f64 / 1000.0)
    }

    #[inline]
    pub fn from_mins(mins: f64) -> Self {
        Seconds(mins * 60.0)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True for values strictly below zero (`-0.0` is not negative)
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Finite and not negative
    #[inline]
    pub fn is_valid(self) -> bool {
        self.is_finite() && !self.is_negative()
    }

    /// Subtract, flooring the result at zero
    #[inline]
    pub fn saturating_sub(self, rhs: Seconds) -> Self {
        Seconds((self.0 - rhs.0).max(0.0))
    }

    /// Convert to a `Duration`, failing for negative, NaN or overflowing values
    pub fn try_into_duration(self) -> TimerResult<Duration> {
        Duration::try_from_secs_f64(self.0).map_err(|_| TimerError::NotRepresentable(self))
    }
}

impl From<f64> for Seconds {
    #[inline]
    fn from(secs: f64) -> Self {
        Seconds(secs)
    }
}

impl From<Duration> for Seconds {
    #[inline]
    fn from(duration: Duration) -> Self {
        Seconds(duration.as_secs_f64())
    }
}

impl Add for Seconds {
    type Output = Seconds;

    #[inline]
    fn add(self, rhs: Seconds) -> Self::Output {
        Seconds(self.0 + rhs.0)
    }
}

impl AddAssign for Seconds {
    #[inline]
    fn add_assign(&mut self, rhs: Seconds) {
        self.0 += rhs.0;
    }
}

impl Sub for Seconds {
    type Output = Seconds;

    #[inline]
    fn sub(self, rhs: Seconds) -> Self::Output {
        Seconds(self.0 - rhs.0)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

impl fmt::Debug for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
