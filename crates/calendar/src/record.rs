//! Resolved calendar records produced by resolution and conversion.

use crate::date::{Era, SimpleDate, SimpleTime};

/// Folds any integer onto the 1-based weekday cycle (1 = Sunday, 7 = Saturday).
pub(crate) fn wrap_weekday(n: i64) -> u8 {
    match n.rem_euclid(7) {
        0 => 7,
        r => r as u8,
    }
}

/// Month-level facts for one BS month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NepaliMonthCalendar {
    year: i32,
    month: u8,
    total_days_in_month: u8,
    first_day_of_month: u8,
    last_day_of_month: u8,
    days_from_start_of_week_to_first_of_month: u8,
}

impl NepaliMonthCalendar {
    pub(crate) fn new(year: i32, month: u8, total_days_in_month: u8, first_day_of_month: u8) -> Self {
        Self {
            year,
            month,
            total_days_in_month,
            first_day_of_month,
            last_day_of_month: wrap_weekday(
                i64::from(first_day_of_month) + i64::from(total_days_in_month) - 1,
            ),
            days_from_start_of_week_to_first_of_month: first_day_of_month - 1,
        }
    }

    /// Returns the BS year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the BS month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the number of days in the month.
    pub fn total_days_in_month(&self) -> u8 {
        self.total_days_in_month
    }

    /// Returns the weekday of day 1 (1 = Sunday).
    pub fn first_day_of_month(&self) -> u8 {
        self.first_day_of_month
    }

    /// Returns the weekday of the last day (1 = Sunday).
    pub fn last_day_of_month(&self) -> u8 {
        self.last_day_of_month
    }

    /// Returns how many leading cells a Sunday-first month grid leaves blank.
    pub fn days_from_start_of_week_to_first_of_month(&self) -> u8 {
        self.days_from_start_of_week_to_first_of_month
    }
}

/// A fully resolved date in either calendar.
///
/// Weekdays run 1 = Sunday through 7 = Saturday. Week numbers start at 1
/// and advance every Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomCalendar {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day_of_month: u8,
    pub(crate) era: Era,
    pub(crate) first_day_of_month: u8,
    pub(crate) last_day_of_month: u8,
    pub(crate) total_days_in_month: u8,
    pub(crate) day_of_week_in_month: u8,
    pub(crate) day_of_week: u8,
    pub(crate) day_of_year: u16,
    pub(crate) week_of_month: u8,
    pub(crate) week_of_year: u8,
}

impl CustomCalendar {
    /// Recomputes the fields that only hold after a walk stops.
    pub(crate) fn settle(mut self) -> Self {
        self.last_day_of_month = wrap_weekday(
            i64::from(self.day_of_week) + i64::from(self.total_days_in_month)
                - i64::from(self.day_of_month),
        );
        self.day_of_week_in_month = (self.day_of_month - 1) / 7 + 1;
        self
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    pub fn day_of_month(&self) -> u8 {
        self.day_of_month
    }

    /// Returns the calendar this record belongs to.
    pub fn era(&self) -> Era {
        self.era
    }

    /// Returns the weekday of day 1 of this month.
    pub fn first_day_of_month(&self) -> u8 {
        self.first_day_of_month
    }

    /// Returns the weekday of the last day of this month.
    pub fn last_day_of_month(&self) -> u8 {
        self.last_day_of_month
    }

    /// Returns the number of days in this month.
    pub fn total_days_in_month(&self) -> u8 {
        self.total_days_in_month
    }

    /// Returns which occurrence of its weekday this day is within the month.
    pub fn day_of_week_in_month(&self) -> u8 {
        self.day_of_week_in_month
    }

    /// Returns the weekday (1 = Sunday).
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Returns the day of year (1-based).
    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Returns the Sunday-started week within the month.
    pub fn week_of_month(&self) -> u8 {
        self.week_of_month
    }

    /// Returns the Sunday-started week within the year.
    pub fn week_of_year(&self) -> u8 {
        self.week_of_year
    }

    /// Returns the year/month/day triple.
    pub fn date(&self) -> SimpleDate {
        SimpleDate::new(self.year, self.month, self.day_of_month)
    }
}

/// A resolved date paired with a civil time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomDateTime {
    calendar: CustomCalendar,
    time: SimpleTime,
}

impl CustomDateTime {
    /// Pairs a resolved date with a time of day.
    pub fn new(calendar: CustomCalendar, time: SimpleTime) -> Self {
        Self { calendar, time }
    }

    /// Returns the resolved date.
    pub fn calendar(&self) -> &CustomCalendar {
        &self.calendar
    }

    /// Returns the time of day.
    pub fn time(&self) -> SimpleTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_weekday_is_one_based() {
        assert_eq!(wrap_weekday(0), 7);
        assert_eq!(wrap_weekday(7), 7);
        assert_eq!(wrap_weekday(8), 1);
        assert_eq!(wrap_weekday(1), 1);
        assert_eq!(wrap_weekday(-1), 6);
        assert_eq!(wrap_weekday(14 + 3), 3);
    }

    #[test]
    fn month_calendar_derives_leading_blanks() {
        let month = NepaliMonthCalendar::new(2082, 4, 32, 4);
        assert_eq!(month.last_day_of_month(), 7);
        assert_eq!(month.days_from_start_of_week_to_first_of_month(), 3);

        let sunday_start = NepaliMonthCalendar::new(2079, 4, 31, 1);
        assert_eq!(sunday_start.last_day_of_month(), 3);
        assert_eq!(sunday_start.days_from_start_of_week_to_first_of_month(), 0);
    }
}
