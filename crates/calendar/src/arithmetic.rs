//! Day and month arithmetic on BS dates.

use tracing::debug;

use crate::date::SimpleDate;
use crate::error::CalendarError;
use crate::month::{DayOverflow, resolve_bs_date, resolve_month};
use crate::record::{CustomCalendar, NepaliMonthCalendar};
use crate::table::{BS_YEARS, bs_ordinal, check_bs_year, check_month, days_in_bs_month};

/// Upper bound on month hops for one adjustment: every month in the table
/// plus the starting month. Any delta needing more hops has already left
/// the table and failed on a missing year.
const MAX_MONTH_HOPS: usize = (*BS_YEARS.end()).abs_diff(*BS_YEARS.start()) as usize * 12 + 13;

/// Moves a BS date by a signed number of days.
///
/// The date hops month by month until the remaining delta lands inside the
/// current month, then resolves that day.
///
/// # Errors
///
/// Returns [`CalendarError`] if the starting date is invalid or the result
/// falls outside [`BS_YEARS`].
#[tracing::instrument(level = "debug")]
pub fn adjust_by_days(
    year: i32,
    month: u8,
    day: u8,
    delta: i32,
) -> Result<CustomCalendar, CalendarError> {
    let start_total = days_in_bs_month(year, month)?;
    if day == 0 || day > start_total {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day: start_total,
        });
    }

    let (mut year, mut month, mut day, mut remaining) = (year, month, day, i64::from(delta));
    for hop in 0..MAX_MONTH_HOPS {
        let total = days_in_bs_month(year, month)?;
        let target = i64::from(day) + remaining;
        if (1..=i64::from(total)).contains(&target) {
            debug!(hops = hop, "adjustment settled");
            return resolve_bs_date(year, month, target as u8, DayOverflow::Clamp);
        }
        if remaining > 0 {
            remaining -= i64::from(total) - i64::from(day) + 1;
            day = 1;
            (year, month) = next_month(year, month);
        } else {
            remaining += i64::from(day);
            (year, month) = previous_month(year, month);
            day = days_in_bs_month(year, month)?;
        }
    }
    Err(CalendarError::YearOutOfRange {
        calendar: "BS",
        year,
        min: *BS_YEARS.start(),
        max: *BS_YEARS.end(),
    })
}

fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Normalizes `month + delta` into a (year, month) pair.
fn shift_year_month(year: i32, month: u8, delta: i32) -> Result<(i32, u8), CalendarError> {
    check_bs_year(year)?;
    check_month(month)?;
    let slot = i64::from(month - 1) + i64::from(delta);
    // A table year plus |delta| / 12 stays inside i32.
    let year = year + slot.div_euclid(12) as i32;
    Ok((year, slot.rem_euclid(12) as u8 + 1))
}

/// Moves a BS month by a signed number of months.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month is invalid or the result falls
/// outside [`BS_YEARS`].
pub fn add_months(year: i32, month: u8, delta: i32) -> Result<NepaliMonthCalendar, CalendarError> {
    let (year, month) = shift_year_month(year, month, delta)?;
    resolve_month(year, month)
}

/// Moves a BS month back by a number of months.
///
/// # Errors
///
/// See [`add_months`].
pub fn subtract_months(
    year: i32,
    month: u8,
    delta: i32,
) -> Result<NepaliMonthCalendar, CalendarError> {
    add_months(year, month, delta.saturating_neg())
}

/// Moves a full BS date by whole months, capping the day at the target
/// month's length.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month is invalid or the result falls
/// outside [`BS_YEARS`].
pub fn shift_months(date: SimpleDate, delta: i32) -> Result<CustomCalendar, CalendarError> {
    let (year, month) = shift_year_month(date.year(), date.month(), delta)?;
    resolve_bs_date(year, month, date.day(), DayOverflow::Clamp)
}

/// Counts days from `start` to `end`, both BS dates.
///
/// Days are checked against the nominal 1..=32 range only.
///
/// # Errors
///
/// Returns [`CalendarError`] if either year is outside [`BS_YEARS`] or a
/// month or day is out of range.
pub fn days_between(start: SimpleDate, end: SimpleDate) -> Result<i64, CalendarError> {
    if start.year() > end.year() {
        return days_between(end, start).map(|d| -d);
    }
    Ok(offset(end)? - offset(start)?)
}

fn offset(date: SimpleDate) -> Result<i64, CalendarError> {
    check_bs_year(date.year())?;
    check_month(date.month())?;
    if !(1..=32).contains(&date.day()) {
        return Err(CalendarError::InvalidDay {
            day: date.day(),
            month: date.month(),
            max_day: 32,
        });
    }
    bs_ordinal(date.year(), date.month(), date.day())
}
