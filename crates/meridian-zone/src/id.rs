//! Canonical display ids for fixed offsets

use meridian_core::{MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Id used for the zero offset
pub const UTC_ID: &str = "Z";

/// Build the canonical id for an already-validated offset.
///
/// Zero is `Z`. Anything else is `{sign}HH:MM`, followed by `:SS` only when
/// the seconds part is non-zero: `9000` is `+02:30`, `-3661` is `-01:01:01`.
pub fn canonical_id(total_seconds: i32) -> String {
    if total_seconds == 0 {
        return UTC_ID.to_string();
    }
    let sign = if total_seconds < 0 { '-' } else { '+' };
    let abs = total_seconds.unsigned_abs();
    let hours = abs / SECONDS_PER_HOUR as u32;
    let minutes = (abs / SECONDS_PER_MINUTE as u32) % MINUTES_PER_HOUR as u32;
    let seconds = abs % SECONDS_PER_MINUTE as u32;

    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_z() {
        assert_eq!(canonical_id(0), "Z");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(canonical_id(9000), "+02:30");
        assert_eq!(canonical_id(-18_000), "-05:00");
        assert_eq!(canonical_id(64_800), "+18:00");
        assert_eq!(canonical_id(-64_800), "-18:00");
        assert_eq!(canonical_id(20_700), "+05:45");
    }

    #[test]
    fn test_seconds_only_when_non_zero() {
        assert_eq!(canonical_id(-3661), "-01:01:01");
        assert_eq!(canonical_id(1), "+00:00:01");
        assert_eq!(canonical_id(-59), "-00:00:59");
        assert_eq!(canonical_id(3600 + 60), "+01:01");
    }
}
