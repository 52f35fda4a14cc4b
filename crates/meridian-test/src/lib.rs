//! Meridian Test Harness - Stress testing and benchmarking for zone offsets
//!
//! This crate provides:
//! - Multi-threaded stress runs against a shared offset cache
//! - Preset stress scenarios
//! - Tracing setup for tests and benches

pub mod logging;
pub mod stress;

pub use logging::*;
pub use stress::*;
