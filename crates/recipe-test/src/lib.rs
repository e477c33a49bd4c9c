//! Recipe Timer Test Harness
//!
//! This crate provides:
//! - Seeded tick simulation with jittered and lagging tick sources
//! - Predefined simulation scenarios
//! - Tracing setup for tests

pub mod logging;
pub mod simulator;

pub use logging::*;
pub use simulator::*;
