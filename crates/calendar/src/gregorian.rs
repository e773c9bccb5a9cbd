//! Gregorian helpers backed by chrono.

use chrono::{Datelike, NaiveDate};

use crate::date::{Era, SimpleDate};
use crate::error::CalendarError;
use crate::record::{CustomCalendar, wrap_weekday};
use crate::table::{check_ad_year, check_month};

/// Converts a triple to a chrono date, rejecting impossible days.
pub(crate) fn naive_date(year: i32, month: u8, day: u8) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or_else(|| {
        CalendarError::InvalidDay {
            day,
            month,
            max_day: days_in_month_unchecked(year, month),
        }
    })
}

fn days_in_month_unchecked(year: i32, month: u8) -> u8 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, u32::from(month) + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, u32::from(month), 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => (end - start).num_days() as u8,
        _ => 0,
    }
}

/// Returns the number of days in a Gregorian month, honoring leap years.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if the month is outside 1..=12.
pub fn days_in_ad_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(days_in_month_unchecked(year, month))
}

/// Returns the signed number of days from `start` to `end` in the Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError`] if either date does not exist.
pub fn ad_days_between(start: SimpleDate, end: SimpleDate) -> Result<i64, CalendarError> {
    let a = naive_date(start.year(), start.month(), start.day())?;
    let b = naive_date(end.year(), end.month(), end.day())?;
    Ok((b - a).num_days())
}

/// Compares two dates field by field.
///
/// Returns the signed difference of the first field that differs (year,
/// then month, then day), or 0 when the dates are equal.
pub fn compare_dates(a: SimpleDate, b: SimpleDate) -> i32 {
    if a.year() != b.year() {
        a.year() - b.year()
    } else if a.month() != b.month() {
        i32::from(a.month()) - i32::from(b.month())
    } else {
        i32::from(a.day()) - i32::from(b.day())
    }
}

/// Parses a compact `yyyymmdd` string into a [`SimpleDate`].
///
/// Only the shape is checked; the date is validated by whichever calendar
/// consumes it.
///
/// # Errors
///
/// Returns [`CalendarError::Parse`] unless the text is exactly eight ASCII digits.
pub fn parse_compact_date(text: &str) -> Result<SimpleDate, CalendarError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::parse(text, "expected yyyymmdd"));
    }
    let field = |range: std::ops::Range<usize>| -> Result<u32, CalendarError> {
        text[range]
            .parse()
            .map_err(|_| CalendarError::parse(text, "expected yyyymmdd"))
    };
    Ok(SimpleDate::new(
        field(0..4)? as i32,
        field(4..6)? as u8,
        field(6..8)? as u8,
    ))
}

/// Resolves a Gregorian date directly from chrono.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is outside [`crate::AD_YEARS`] or the
/// date does not exist.
pub fn resolve_ad_date(year: i32, month: u8, day: u8) -> Result<CustomCalendar, CalendarError> {
    check_ad_year(year)?;
    Ok(ad_record(naive_date(year, month, day)?))
}

/// Builds an AD record for any chrono date.
pub(crate) fn ad_record(date: NaiveDate) -> CustomCalendar {
    let year = date.year();
    let month = date.month() as u8;
    let day = date.day() as u8;
    let dow = date.weekday().number_from_sunday() as u8;
    let first = wrap_weekday(i64::from(dow) - i64::from(day) + 1);
    let jan_first = wrap_weekday(i64::from(dow) - i64::from(date.ordinal()) + 1);
    CustomCalendar {
        year,
        month,
        day_of_month: day,
        era: Era::Ad,
        first_day_of_month: first,
        last_day_of_month: 0,
        total_days_in_month: days_in_month_unchecked(year, month),
        day_of_week_in_month: 0,
        day_of_week: dow,
        day_of_year: date.ordinal() as u16,
        week_of_month: week_number(u16::from(day), first),
        week_of_year: week_number(date.ordinal() as u16, jan_first),
    }
    .settle()
}

/// Sunday-started week containing day `n` of a span whose day 1 falls on `first`.
pub(crate) fn week_number(n: u16, first: u8) -> u8 {
    let shifted = n + u16::from(first) - 1;
    shifted.div_ceil(7) as u8
}
