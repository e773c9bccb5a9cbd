//! Error types for the sambat-calendar crate.

/// Error type for all fallible operations in the sambat-calendar crate.
///
/// Range failures (`YearOutOfRange`, `DateOutOfRange`) mean the input lies
/// outside what the reference table can answer. Field failures
/// (`InvalidMonth`, `InvalidDay`, `InvalidTime`) mean the input is not a
/// well-formed date or time in the first place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year falls outside the supported window of its calendar.
    #[error("{calendar} year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// Calendar the year belongs to (`"BS"` or `"AD"`).
        calendar: &'static str,
        /// The year that was provided.
        year: i32,
        /// Lowest supported year.
        min: i32,
        /// Highest supported year.
        max: i32,
    },

    /// Returned when a Gregorian date lies inside a supported year but before
    /// the calendar epoch.
    #[error("date {year:04}-{month:02}-{day:02} precedes the calendar epoch")]
    DateOutOfRange {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: u8,
        /// Gregorian day of month.
        day: u8,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        /// Hour of day (0..=23).
        hour: u8,
        /// Minute (0..=59).
        minute: u8,
        /// Second (0..=59).
        second: u8,
        /// Nanosecond (0..=999_999_999).
        nanosecond: u32,
    },

    /// Returned when a wall-clock time falls in a gap of the Kathmandu
    /// offset history (1986-01-01 00:00 to 00:15).
    #[error("{local} never occurred in Kathmandu local time")]
    NonexistentLocalTime {
        /// The skipped local date-time.
        local: chrono::NaiveDateTime,
    },

    /// Returned when date or timestamp text cannot be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CalendarError {
    /// Returns `true` for failures caused by the supported range rather than
    /// by a malformed field.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CalendarError::YearOutOfRange { .. } | CalendarError::DateOutOfRange { .. }
        )
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CalendarError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
