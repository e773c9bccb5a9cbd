//! Calendar-agnostic date and time-of-day values.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::CalendarError;

/// Calendar system tag carried on every resolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Era {
    /// Gregorian calendar.
    Ad = 1,
    /// Bikram Sambat calendar.
    Bs = 2,
}

impl Era {
    /// Returns the numeric discriminator (1 = AD, 2 = BS).
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::Ad => f.write_str("AD"),
            Era::Bs => f.write_str("BS"),
        }
    }
}

/// A minimal year/month/day triple, not tied to either calendar.
///
/// No validation happens at construction; the operation that consumes a
/// `SimpleDate` checks it against the calendar it is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SimpleDate {
    /// Creates a new `SimpleDate`.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date on the first day of the given month.
    pub const fn first_of_month(year: i32, month: u8) -> Self {
        Self::new(year, month, 1)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the zero-based month slot of this date within `years`.
    ///
    /// Slot 0 is month 1 of the first year. Returns `None` when the year is
    /// outside `years` or the month is outside 1..=12.
    pub fn index_in(self, years: &RangeInclusive<i32>) -> Option<usize> {
        if !years.contains(&self.year) || !(1..=12).contains(&self.month) {
            return None;
        }
        let year_offset = usize::try_from(self.year - years.start()).ok()?;
        Some(year_offset * 12 + usize::from(self.month - 1))
    }
}

impl fmt::Display for SimpleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock time of day in the civil timezone (Asia/Kathmandu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimpleTime {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl SimpleTime {
    /// Creates a new `SimpleTime`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                nanosecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Returns 00:00:00.
    pub const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the hour on a 12-hour clock (1..=12).
    pub fn hour_12(self) -> u8 {
        match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the nanosecond (0..=999_999_999).
    pub fn nanosecond(self) -> u32 {
        self.nanosecond
    }
}

impl fmt::Display for SimpleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}
