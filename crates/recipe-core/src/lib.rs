//! Recipe Timer Core - Fundamental quantities and errors
//!
//! This crate defines the types shared by the timer crates:
//! - Time quantity (Seconds)
//! - Error taxonomy (TimerError, TimerResult)

pub mod time;
pub mod error;

pub use time::*;
pub use error::*;
