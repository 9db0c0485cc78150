//! POSIX time zone strings
//!
//! Supports the `std offset [dst [offset] [,start[/time],end[/time]]]` form
//! with `Mm.w.d` transition rules, which covers the zones a control surface
//! usually offers (`CET-1CEST,M3.5.0,M10.5.0/3`, `IST-5:30`, `UTC0`, ...).

use core::fmt;

use chrono::{DateTime, Datelike, NaiveDate};

const SECONDS_PER_HOUR: i32 = 3600;
const DEFAULT_TRANSITION_TIME: i32 = 2 * SECONDS_PER_HOUR;
const MAX_OFFSET_HOURS: u32 = 24;
const MAX_TRANSITION_HOURS: u32 = 167;

/// Rules applied when a DST name is given without transition rules
const DEFAULT_DST_START: TransitionRule = TransitionRule {
    month: 3,
    week: 2,
    weekday: 0,
    time: DEFAULT_TRANSITION_TIME,
};
const DEFAULT_DST_END: TransitionRule = TransitionRule {
    month: 11,
    week: 1,
    weekday: 0,
    time: DEFAULT_TRANSITION_TIME,
};

/// Error returned by [`PosixTz::parse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzError {
    /// Zone abbreviation missing or malformed
    InvalidName { position: usize },
    /// UTC offset missing or out of range
    InvalidOffset { position: usize },
    /// Transition rule malformed
    InvalidRule { position: usize },
    /// Julian day rules (`Jn`, `n`) are not supported
    UnsupportedRule { position: usize },
    /// Unexpected characters after a complete zone
    TrailingInput { position: usize },
}

impl fmt::Display for TzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { position } => write!(f, "invalid zone name at {position}"),
            Self::InvalidOffset { position } => write!(f, "invalid offset at {position}"),
            Self::InvalidRule { position } => write!(f, "invalid rule at {position}"),
            Self::UnsupportedRule { position } => {
                write!(f, "unsupported julian day rule at {position}")
            }
            Self::TrailingInput { position } => write!(f, "unexpected input at {position}"),
        }
    }
}

/// `Mm.w.d/time` rule: weekday `d` (0 = Sunday) of week `w` (5 = last) in
/// month `m`, at `time` seconds past local midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub month: u8,
    pub week: u8,
    pub weekday: u8,
    pub time: i32,
}

impl TransitionRule {
    /// Local wall-clock timestamp of the transition in `year`
    fn local_timestamp(self, year: i32) -> Option<i64> {
        let month = u32::from(self.month);
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_weekday = first.weekday().num_days_from_sunday();
        let weekday = u32::from(self.weekday);
        let weeks_after_first = u32::from(self.week).checked_sub(1)?;
        let mut day = 1 + (weekday + 7 - first_weekday) % 7 + weeks_after_first * 7;

        // Week 5 means "last", which may be the fourth one
        let date = loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                break date;
            }
            day = day.checked_sub(7)?;
        };

        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc().timestamp();
        Some(midnight + i64::from(self.time))
    }
}

/// Daylight saving part of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightSaving {
    /// Offset east of UTC while DST is active, in seconds
    pub offset: i32,
    pub start: TransitionRule,
    pub end: TransitionRule,
}

/// Parsed POSIX `TZ` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixTz {
    /// Standard offset east of UTC, in seconds
    pub std_offset: i32,
    pub dst: Option<DaylightSaving>,
}

impl PosixTz {
    /// Parse a POSIX `TZ` string
    pub fn parse(value: &str) -> Result<Self, TzError> {
        let mut cursor = Cursor::new(value);

        cursor.name()?;
        // POSIX offsets count westwards
        let std_offset = -cursor.hms(MAX_OFFSET_HOURS, TzError::InvalidOffset { position: cursor.pos })?;

        if cursor.is_done() {
            return Ok(Self {
                std_offset,
                dst: None,
            });
        }

        cursor.name()?;
        let dst_offset = match cursor.peek() {
            Some(b',') | None => std_offset + SECONDS_PER_HOUR,
            Some(_) => -cursor.hms(MAX_OFFSET_HOURS, TzError::InvalidOffset { position: cursor.pos })?,
        };

        let (start, end) = if cursor.eat(b',') {
            let start = cursor.rule()?;
            if !cursor.eat(b',') {
                return Err(TzError::InvalidRule {
                    position: cursor.pos,
                });
            }
            let end = cursor.rule()?;
            (start, end)
        } else {
            (DEFAULT_DST_START, DEFAULT_DST_END)
        };

        if !cursor.is_done() {
            return Err(TzError::TrailingInput {
                position: cursor.pos,
            });
        }

        Ok(Self {
            std_offset,
            dst: Some(DaylightSaving {
                offset: dst_offset,
                start,
                end,
            }),
        })
    }

    /// Offset east of UTC in effect at a unix timestamp
    pub fn offset_at(&self, unix_time: i64) -> i32 {
        let Some(dst) = self.dst else {
            return self.std_offset;
        };
        let local = unix_time.saturating_add(i64::from(self.std_offset));
        let Some(year) = DateTime::from_timestamp(local, 0).map(|t| t.year()) else {
            return self.std_offset;
        };
        let (Some(start), Some(end)) = (
            dst.start.local_timestamp(year),
            dst.end.local_timestamp(year),
        ) else {
            return self.std_offset;
        };

        // DST starts on standard wall time and ends on daylight wall time
        let start = start - i64::from(self.std_offset);
        let end = end - i64::from(dst.offset);

        let in_dst = if start < end {
            unix_time >= start && unix_time < end
        } else {
            // Southern hemisphere: DST spans the new year
            unix_time < end || unix_time >= start
        };

        if in_dst { dst.offset } else { self.std_offset }
    }
}

/// Time zone used to turn UTC into displayed wall time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZone {
    #[default]
    Utc,
    /// Constant offset east of UTC, in seconds
    Fixed(i32),
    Posix(PosixTz),
}

impl TimeZone {
    /// Parse a POSIX `TZ` string
    pub fn parse(value: &str) -> Result<Self, TzError> {
        PosixTz::parse(value).map(Self::Posix)
    }

    /// Offset east of UTC in effect at a unix timestamp
    pub fn offset_at(&self, unix_time: i64) -> i32 {
        match self {
            Self::Utc => 0,
            Self::Fixed(offset) => *offset,
            Self::Posix(tz) => tz.offset_at(unix_time),
        }
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(value: &'a str) -> Self {
        Self {
            bytes: value.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Zone abbreviation: `<...>` or at least three letters
    fn name(&mut self) -> Result<(), TzError> {
        let start = self.pos;
        if self.eat(b'<') {
            while let Some(byte) = self.peek() {
                self.pos += 1;
                if byte == b'>' {
                    return if self.pos - start > 2 {
                        Ok(())
                    } else {
                        Err(TzError::InvalidName { position: start })
                    };
                }
            }
            return Err(TzError::InvalidName { position: start });
        }

        while self.peek().is_some_and(|byte| byte.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos - start < 3 {
            return Err(TzError::InvalidName { position: start });
        }
        Ok(())
    }

    /// Unsigned decimal number of at most `max_digits` digits
    fn number(&mut self, max_digits: usize) -> Option<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() || self.pos - start >= max_digits {
                break;
            }
            value = value * 10 + u32::from(byte - b'0');
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }

    /// `[+|-]hh[:mm[:ss]]` in seconds
    fn hms(&mut self, max_hours: u32, error: TzError) -> Result<i32, TzError> {
        let negative = if self.eat(b'-') {
            true
        } else {
            self.eat(b'+');
            false
        };

        let hours = self.number(3).filter(|&h| h <= max_hours).ok_or(error)?;
        let mut seconds = hours * 3600;
        if self.eat(b':') {
            let minutes = self.number(2).filter(|&m| m < 60).ok_or(error)?;
            seconds += minutes * 60;
            if self.eat(b':') {
                seconds += self.number(2).filter(|&s| s < 60).ok_or(error)?;
            }
        }

        let seconds = i32::try_from(seconds).map_err(|_| error)?;
        Ok(if negative { -seconds } else { seconds })
    }

    /// `Mm.w.d[/time]`
    fn rule(&mut self) -> Result<TransitionRule, TzError> {
        let position = self.pos;
        match self.peek() {
            Some(b'M') => self.pos += 1,
            Some(b'J') => return Err(TzError::UnsupportedRule { position }),
            Some(byte) if byte.is_ascii_digit() => {
                return Err(TzError::UnsupportedRule { position });
            }
            _ => return Err(TzError::InvalidRule { position }),
        }

        let error = TzError::InvalidRule { position };
        let month = self.number(2).filter(|m| (1..=12).contains(m)).ok_or(error)?;
        if !self.eat(b'.') {
            return Err(error);
        }
        let week = self.number(1).filter(|w| (1..=5).contains(w)).ok_or(error)?;
        if !self.eat(b'.') {
            return Err(error);
        }
        let weekday = self.number(1).filter(|&d| d <= 6).ok_or(error)?;

        let time = if self.eat(b'/') {
            self.hms(MAX_TRANSITION_HOURS, error)?
        } else {
            DEFAULT_TRANSITION_TIME
        };

        #[allow(clippy::cast_possible_truncation)]
        Ok(TransitionRule {
            month: month as u8,
            week: week as u8,
            weekday: weekday as u8,
            time,
        })
    }
}
