//! Wall clock resolution for the clock effects
//!
//! Turns a raw unix timestamp into the hour and minute shown on the panel.
//! A clock that has not been synchronized yet (or reports a nonsense date)
//! is rejected instead of being rendered.

use core::fmt;

use chrono::{DateTime, Datelike, Timelike};

use crate::tz::TimeZone;

/// Anything below this has certainly not been set by NTP
pub const MIN_VALID_UNIX_TIME: i64 = 100_000;
/// First accepted UTC year
pub const MIN_VALID_YEAR: i32 = 2020;
/// First rejected UTC year
pub const MAX_VALID_YEAR: i32 = 2100;

/// Source of calendar time, usually backed by an RTC or SNTP client
pub trait WallClock {
    /// Seconds since the unix epoch, UTC
    fn unix_time(&self) -> i64;
}

/// Why a timestamp cannot be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// Timestamp below [`MIN_VALID_UNIX_TIME`]
    Unsynchronized { unix_time: i64 },
    /// UTC year outside `[MIN_VALID_YEAR, MAX_VALID_YEAR)`
    ImplausibleYear { year: i32 },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsynchronized { unix_time } => {
                write!(f, "clock not synchronized (unix time {unix_time})")
            }
            Self::ImplausibleYear { year } => write!(f, "implausible year {year}"),
        }
    }
}

/// 12 or 24 hour display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourFormat {
    #[default]
    H24,
    H12,
}

impl HourFormat {
    /// Map a 0-23 hour to the hour shown on the display
    pub const fn display_hour(self, hour: u8) -> u8 {
        match self {
            Self::H24 => hour,
            Self::H12 => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Hour and minute as they appear on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    pub hour: u8,
    pub minute: u8,
}

impl DisplayTime {
    /// Digits in screen order: hour tens, hour units, minute tens, minute units
    pub const fn digits(self) -> [u8; 4] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
        ]
    }
}

/// Everything needed to turn UTC into displayed time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockSettings {
    pub time_zone: TimeZone,
    pub hour_format: HourFormat,
}

impl ClockSettings {
    /// Resolve a unix timestamp to the displayed hour and minute
    pub fn display_time(&self, unix_time: i64) -> Result<DisplayTime, ClockError> {
        if unix_time < MIN_VALID_UNIX_TIME {
            return Err(ClockError::Unsynchronized { unix_time });
        }
        let utc = DateTime::from_timestamp(unix_time, 0)
            .ok_or(ClockError::Unsynchronized { unix_time })?;
        let year = utc.year();
        if !(MIN_VALID_YEAR..MAX_VALID_YEAR).contains(&year) {
            return Err(ClockError::ImplausibleYear { year });
        }

        let offset = i64::from(self.time_zone.offset_at(unix_time));
        let local = DateTime::from_timestamp(unix_time + offset, 0)
            .ok_or(ClockError::Unsynchronized { unix_time })?;

        #[allow(clippy::cast_possible_truncation)]
        Ok(DisplayTime {
            hour: self.hour_format.display_hour(local.hour() as u8),
            minute: local.minute() as u8,
        })
    }
}
