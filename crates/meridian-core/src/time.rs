//! Time primitives for Meridian
//!
//! Two views of time are used when resolving zone rules:
//! - Instant: a point on the UTC time-line, seconds since 1970-01-01T00:00Z
//! - LocalDateTime: a wall-clock reading with no zone attached

use std::fmt;
use std::ops::Add;
use std::time::Duration;

use crate::{MeridianError, MeridianResult};

pub const SECONDS_PER_MINUTE: i32 = 60;
pub const MINUTES_PER_HOUR: i32 = 60;
pub const SECONDS_PER_HOUR: i32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub const HOURS_PER_DAY: i32 = 24;
pub const SECONDS_PER_DAY: i32 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Point on the UTC time-line
/// Stored as whole epoch seconds plus a nanosecond adjustment in 0..1e9
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    pub const EPOCH: Instant = Instant { seconds: 0, nanos: 0 };

    #[inline]
    pub fn from_epoch_second(seconds: i64) -> Self {
        Instant { seconds, nanos: 0 }
    }

    /// Seconds plus a nanosecond adjustment that may be negative or exceed
    /// one second; the result is normalized
    #[inline]
    pub fn from_epoch_second_adjusted(seconds: i64, nano_adjustment: i64) -> Self {
        let nanos_per_second = NANOS_PER_SECOND as i64;
        let seconds = seconds.saturating_add(nano_adjustment.div_euclid(nanos_per_second));
        let nanos = nano_adjustment.rem_euclid(nanos_per_second) as u32;
        Instant { seconds, nanos }
    }

    /// Milliseconds before the epoch round towards negative infinity
    #[inline]
    pub fn from_epoch_millis(millis: i64) -> Self {
        Instant {
            seconds: millis.div_euclid(1000),
            nanos: (millis.rem_euclid(1000) * 1_000_000) as u32,
        }
    }

    #[inline]
    pub fn epoch_second(self) -> i64 {
        self.seconds
    }

    #[inline]
    pub fn nano(self) -> u32 {
        self.nanos
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let secs = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
        Instant::from_epoch_second_adjusted(
            self.seconds.saturating_add(secs),
            self.nanos as i64 + duration.subsec_nanos() as i64,
        )
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}.{:09}s)", self.seconds, self.nanos)
    }
}

/// Calendar date in the proleptic Gregorian calendar, without a zone
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate {
    year: i32,
    month: u8,
    day: u8,
}

impl LocalDate {
    pub const MIN_YEAR: i32 = -999_999_999;
    pub const MAX_YEAR: i32 = 999_999_999;

    pub fn new(year: i32, month: u8, day: u8) -> MeridianResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(MeridianError::InvalidField { field: "year", value: year as i64 });
        }
        if !(1..=12).contains(&month) {
            return Err(MeridianError::InvalidField { field: "month", value: month as i64 });
        }
        if day == 0 || day > Self::length_of_month(year, month) {
            return Err(MeridianError::InvalidField { field: "day", value: day as i64 });
        }
        Ok(LocalDate { year, month, day })
    }

    #[inline]
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in `month` of `year`; `month` must be in 1..=12
    pub fn length_of_month(year: i32, month: u8) -> u8 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(f, "{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
    }
}

/// Wall-clock time of day, nanosecond precision
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
    nano: u32,
}

impl LocalTime {
    pub const MIDNIGHT: LocalTime = LocalTime { hour: 0, minute: 0, second: 0, nano: 0 };
    pub const NOON: LocalTime = LocalTime { hour: 12, minute: 0, second: 0, nano: 0 };

    pub fn new(hour: u8, minute: u8, second: u8, nano: u32) -> MeridianResult<Self> {
        if hour as i32 >= HOURS_PER_DAY {
            return Err(MeridianError::InvalidField { field: "hour", value: hour as i64 });
        }
        if minute as i32 >= MINUTES_PER_HOUR {
            return Err(MeridianError::InvalidField { field: "minute", value: minute as i64 });
        }
        if second as i32 >= SECONDS_PER_MINUTE {
            return Err(MeridianError::InvalidField { field: "second", value: second as i64 });
        }
        if nano >= NANOS_PER_SECOND {
            return Err(MeridianError::InvalidField { field: "nano", value: nano as i64 });
        }
        Ok(LocalTime { hour, minute, second, nano })
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(self) -> u8 {
        self.second
    }

    #[inline]
    pub fn nano(self) -> u32 {
        self.nano
    }

    /// Seconds elapsed since midnight
    #[inline]
    pub fn to_second_of_day(self) -> i32 {
        self.hour as i32 * SECONDS_PER_HOUR
            + self.minute as i32 * SECONDS_PER_MINUTE
            + self.second as i32
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nano != 0 {
            write!(f, ".{:09}", self.nano)?;
        }
        Ok(())
    }
}

/// Date and wall-clock time with no zone attached
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    pub date: LocalDate,
    pub time: LocalTime,
}

impl LocalDateTime {
    #[inline]
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        LocalDateTime { date, time }
    }

    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> MeridianResult<Self> {
        Ok(LocalDateTime {
            date: LocalDate::new(year, month, day)?,
            time: LocalTime::new(hour, minute, second, 0)?,
        })
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
