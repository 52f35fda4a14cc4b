//! Error types for Meridian

use thiserror::Error;

/// Reasons a proposed zone offset is rejected.
///
/// Each variant corresponds to exactly one validation rule and carries the
/// value(s) that broke it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetError {
    #[error("not in valid range: -18:00 to +18:00, got {0} seconds")]
    TotalSecondsOutOfRange(i32),

    #[error("total minutes {0} too large to convert to seconds")]
    TotalMinutesOutOfRange(i32),

    #[error("hours not in valid range: value {0} is not in the range -18 to 18")]
    HoursOutOfRange(i32),

    #[error(
        "minutes and seconds must be positive because hours is positive: \
         hours {hours}, minutes {minutes}, seconds {seconds}"
    )]
    ExpectedPositive { hours: i32, minutes: i32, seconds: i32 },

    #[error(
        "minutes and seconds must be negative because hours is negative: \
         hours {hours}, minutes {minutes}, seconds {seconds}"
    )]
    ExpectedNegative { hours: i32, minutes: i32, seconds: i32 },

    #[error("minutes and seconds must have the same sign: minutes {minutes}, seconds {seconds}")]
    MixedSign { minutes: i32, seconds: i32 },

    #[error("minutes not in valid range: abs(value) {0} is not in the range 0 to 59")]
    MinutesOutOfRange(i32),

    #[error("seconds not in valid range: abs(value) {0} is not in the range 0 to 59")]
    SecondsOutOfRange(i32),

    #[error(
        "not in valid range: -18:00 to +18:00, got \
         hours {hours}, minutes {minutes}, seconds {seconds}"
    )]
    BeyondLimit { hours: i32, minutes: i32, seconds: i32 },
}

/// Core Meridian errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeridianError {
    #[error("Invalid zone offset: {0}")]
    InvalidOffset(#[from] OffsetError),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: i64 },
}

impl MeridianError {
    /// The offset rule that failed, if this is an offset error
    pub fn offset_error(&self) -> Option<OffsetError> {
        match self {
            MeridianError::InvalidOffset(err) => Some(*err),
            _ => None,
        }
    }
}

/// Result type for Meridian operations
pub type MeridianResult<T> = Result<T, MeridianError>;
