//! Range and sign checks for zone offsets
//!
//! Both forms are pure. The component form checks its rules in a fixed
//! order and reports only the first one broken.

use meridian_core::{OffsetError, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Largest offset magnitude in hours
pub const MAX_HOURS: i32 = 18;

/// Largest offset magnitude in seconds (18:00)
pub const MAX_SECONDS: i32 = MAX_HOURS * SECONDS_PER_HOUR;

/// Check a total offset in seconds against -18:00..=+18:00
#[inline]
pub fn validate_total_seconds(total_seconds: i32) -> Result<(), OffsetError> {
    if total_seconds.unsigned_abs() > MAX_SECONDS as u32 {
        return Err(OffsetError::TotalSecondsOutOfRange(total_seconds));
    }
    Ok(())
}

/// Check an offset given as hours, minutes and seconds
pub fn validate_hms(hours: i32, minutes: i32, seconds: i32) -> Result<(), OffsetError> {
    if !(-MAX_HOURS..=MAX_HOURS).contains(&hours) {
        return Err(OffsetError::HoursOutOfRange(hours));
    }
    if hours > 0 {
        if minutes < 0 || seconds < 0 {
            return Err(OffsetError::ExpectedPositive { hours, minutes, seconds });
        }
    } else if hours < 0 {
        if minutes > 0 || seconds > 0 {
            return Err(OffsetError::ExpectedNegative { hours, minutes, seconds });
        }
    } else if (minutes > 0 && seconds < 0) || (minutes < 0 && seconds > 0) {
        return Err(OffsetError::MixedSign { minutes, seconds });
    }
    if minutes.unsigned_abs() >= MINUTES_PER_HOUR as u32 {
        return Err(OffsetError::MinutesOutOfRange(minutes));
    }
    if seconds.unsigned_abs() >= SECONDS_PER_MINUTE as u32 {
        return Err(OffsetError::SecondsOutOfRange(seconds));
    }
    // Closes the range exactly at +/-18:00:00
    if hours.abs() == MAX_HOURS && (minutes != 0 || seconds != 0) {
        return Err(OffsetError::BeyondLimit { hours, minutes, seconds });
    }
    Ok(())
}
