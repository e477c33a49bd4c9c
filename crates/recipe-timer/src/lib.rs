//! Recipe Timer - countdown tracking driven by explicit ticks
//!
//! This crate implements the timer itself:
//! - Fixed duration, accumulated elapsed time, running flag
//! - start / stop / reset / tick lifecycle
//! - Elapsed time clamped to the duration, no auto-stop on finish
//! - Opt-in strict validation of durations and tick amounts
//!
//! The timer never reads a clock. Whoever owns it decides how much time
//! has passed and calls [`RecipeTimer::tick`] with that amount.

pub mod config;
pub mod timer;

pub use config::*;
pub use timer::*;

pub use recipe_core::{Seconds, TimerError, TimerResult};
