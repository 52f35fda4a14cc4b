//! Meridian Core - Fundamental date-time types and primitives
//!
//! This crate defines the types shared by every Meridian crate:
//! - Unit constants (seconds per hour, minutes per hour, ...)
//! - Time-line and local date-time inputs (Instant, LocalDateTime)
//! - Error types

pub mod time;
pub mod error;

pub use time::*;
pub use error::*;
