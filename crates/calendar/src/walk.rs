//! Day-walk conversion between Bikram Sambat and Gregorian dates.

use tracing::debug;

use crate::anchor;
use crate::error::CalendarError;
use crate::gregorian::{days_in_ad_month, naive_date};
use crate::record::CustomCalendar;
use crate::table::{bs_ordinal, check_ad_year, check_bs_year, check_month, days_in_bs_month};

/// Month-length lookup for the calendar being walked.
pub(crate) type MonthLength = fn(i32, u8) -> Result<u8, CalendarError>;

/// Advances a record by one day, carrying every counter across month and
/// year boundaries.
///
/// `last_day_of_month` and `day_of_week_in_month` go stale here; call
/// [`CustomCalendar::settle`] once the walk stops.
pub(crate) fn step(cal: &mut CustomCalendar, month_length: MonthLength) -> Result<(), CalendarError> {
    cal.day_of_month += 1;
    cal.day_of_year += 1;
    cal.day_of_week += 1;
    if cal.day_of_week > 7 {
        cal.day_of_week = 1;
        cal.week_of_year += 1;
        cal.week_of_month += 1;
    }
    if cal.day_of_month > cal.total_days_in_month {
        cal.month += 1;
        cal.day_of_month = 1;
        cal.week_of_month = 1;
        if cal.month > 12 {
            cal.year += 1;
            cal.month = 1;
            cal.day_of_year = 1;
            cal.week_of_year = 1;
        }
        cal.total_days_in_month = month_length(cal.year, cal.month)?;
        cal.first_day_of_month = cal.day_of_week;
    }
    Ok(())
}

fn walk(
    start: CustomCalendar,
    days: u32,
    month_length: MonthLength,
) -> Result<CustomCalendar, CalendarError> {
    let mut cal = start;
    for _ in 0..days {
        step(&mut cal, month_length)?;
    }
    Ok(cal.settle())
}

/// Converts a Gregorian date to a resolved BS record.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is outside [`crate::AD_YEARS`], the
/// date does not exist, or it precedes the BS 1970/1/1 epoch.
#[tracing::instrument(level = "debug")]
pub fn to_bs(year: i32, month: u8, day: u8) -> Result<CustomCalendar, CalendarError> {
    check_ad_year(year)?;
    let target = naive_date(year, month, day)?;
    let anchor = anchor::for_ad_year(year)?;
    let start = naive_date(anchor.ad.year, anchor.ad.month, anchor.ad.day_of_month)?;
    let days = u32::try_from((target - start).num_days())
        .map_err(|_| CalendarError::DateOutOfRange { year, month, day })?;
    debug!(days, from = %anchor.bs.date(), "walking BS state");
    walk(anchor.bs, days, days_in_bs_month)
}

/// Converts a BS date to a resolved Gregorian record.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is outside [`crate::BS_YEARS`] or the
/// day exceeds the month's length.
#[tracing::instrument(level = "debug")]
pub fn to_ad(year: i32, month: u8, day: u8) -> Result<CustomCalendar, CalendarError> {
    check_bs_year(year)?;
    check_month(month)?;
    let total = days_in_bs_month(year, month)?;
    if day == 0 || day > total {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day: total,
        });
    }
    let anchor = anchor::for_bs_year(year)?;
    let days = bs_ordinal(year, month, day)?
        - bs_ordinal(anchor.bs.year, anchor.bs.month, anchor.bs.day_of_month)?;
    let days = u32::try_from(days).map_err(|_| CalendarError::DateOutOfRange { year, month, day })?;
    debug!(days, from = %anchor.ad.date(), "walking AD state");
    walk(anchor.ad, days, days_in_ad_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Era;

    #[test]
    fn step_rolls_weekday_and_weeks_on_sunday() {
        let mut cal = anchor::EPOCH.bs;
        for _ in 0..6 {
            step(&mut cal, days_in_bs_month).unwrap();
        }
        assert_eq!(cal.day_of_week, 7);
        assert_eq!(cal.week_of_year, 1);
        step(&mut cal, days_in_bs_month).unwrap();
        assert_eq!(cal.day_of_week, 1);
        assert_eq!(cal.week_of_year, 2);
        assert_eq!(cal.week_of_month, 2);
    }

    #[test]
    fn step_rolls_month_and_year() {
        let mut cal = to_bs(2025, 4, 13).unwrap();
        assert_eq!((cal.year, cal.month, cal.day_of_month), (2081, 12, 31));
        step(&mut cal, days_in_bs_month).unwrap();
        assert_eq!((cal.year, cal.month, cal.day_of_month), (2082, 1, 1));
        assert_eq!(cal.day_of_year, 1);
        assert_eq!(cal.week_of_year, 1);
        assert_eq!(cal.week_of_month, 1);
        assert_eq!(cal.total_days_in_month, 30);
        assert_eq!(cal.first_day_of_month, cal.day_of_week);
    }

    #[test]
    fn to_ad_scenario() {
        let cal = to_ad(2079, 1, 1).unwrap();
        assert_eq!(cal.era(), Era::Ad);
        assert_eq!((cal.year(), cal.month(), cal.day_of_month()), (2022, 4, 14));
        assert_eq!(cal.day_of_week(), 5);
        assert_eq!(cal.first_day_of_month(), 6);
        assert_eq!(cal.last_day_of_month(), 7);
        assert_eq!(cal.total_days_in_month(), 30);
        assert_eq!(cal.day_of_year(), 104);
        assert_eq!(cal.week_of_month(), 3);
        assert_eq!(cal.week_of_year(), 16);
    }

    #[test]
    fn to_bs_leap_day() {
        let cal = to_bs(2024, 2, 29).unwrap();
        assert_eq!(cal.era(), Era::Bs);
        assert_eq!((cal.year(), cal.month(), cal.day_of_month()), (2080, 11, 17));
        assert_eq!(cal.day_of_week(), 5);
        assert_eq!(cal.total_days_in_month(), 30);
    }

    #[test]
    fn epoch_converts_both_ways() {
        assert_eq!(to_bs(1913, 4, 13).unwrap(), anchor::EPOCH.bs);
        assert_eq!(to_ad(1970, 1, 1).unwrap(), anchor::EPOCH.ad);
    }

    #[test]
    fn before_epoch_is_out_of_range() {
        assert_eq!(
            to_bs(1913, 4, 12).unwrap_err(),
            CalendarError::DateOutOfRange {
                year: 1913,
                month: 4,
                day: 12
            }
        );
    }

    #[test]
    fn invalid_fields() {
        assert!(to_ad(2081, 13, 1).is_err());
        assert_eq!(
            to_ad(2081, 1, 32).unwrap_err(),
            CalendarError::InvalidDay {
                day: 32,
                month: 1,
                max_day: 31
            }
        );
        assert!(to_ad(2081, 1, 0).is_err());
        assert!(to_bs(2023, 2, 29).is_err());
        assert!(to_bs(2024, 4, 31).is_err());
    }

    #[test]
    fn unsupported_years() {
        assert!(to_ad(1969, 12, 1).unwrap_err().is_out_of_range());
        assert!(to_ad(2101, 1, 1).unwrap_err().is_out_of_range());
        assert!(to_bs(1912, 1, 1).unwrap_err().is_out_of_range());
        assert!(to_bs(2044, 1, 1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn last_table_day_lands_in_2044() {
        let cal = to_ad(2100, 12, 31).unwrap();
        assert_eq!((cal.year(), cal.month(), cal.day_of_month()), (2044, 4, 13));
    }
}
