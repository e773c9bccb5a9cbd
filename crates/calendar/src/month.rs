//! Month resolution and direct BS date resolution.

use crate::anchor;
use crate::date::Era;
use crate::error::CalendarError;
use crate::gregorian::week_number;
use crate::record::{CustomCalendar, NepaliMonthCalendar, wrap_weekday};
use crate::table::{bs_ordinal, days_before_month, days_in_bs_month};

/// What to do when a requested day is past the end of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayOverflow {
    /// Fail with [`CalendarError::InvalidDay`].
    #[default]
    Strict,
    /// Cap the day at the month's last day.
    Clamp,
}

/// Resolves month length and first/last weekday for a BS month.
///
/// The first weekday is carried forward from the year's anchor by the
/// number of days between the anchor month's first day and this month's.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is outside [`crate::BS_YEARS`] or the
/// month is outside 1..=12.
pub fn resolve_month(year: i32, month: u8) -> Result<NepaliMonthCalendar, CalendarError> {
    let total = days_in_bs_month(year, month)?;
    let anchor = anchor::for_bs_year(year)?.bs;
    let offset = bs_ordinal(year, month, 1)? - bs_ordinal(anchor.year, anchor.month, 1)?;
    let first = wrap_weekday(i64::from(anchor.first_day_of_month) + offset);
    Ok(NepaliMonthCalendar::new(year, month, total, first))
}

/// Resolves a BS date into a full record without walking.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year or month is unsupported, the day is
/// zero, or (with [`DayOverflow::Strict`]) the day exceeds the month length.
pub fn resolve_bs_date(
    year: i32,
    month: u8,
    day: u8,
    overflow: DayOverflow,
) -> Result<CustomCalendar, CalendarError> {
    let month_cal = resolve_month(year, month)?;
    let total = month_cal.total_days_in_month();
    let day = match overflow {
        _ if day == 0 => {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: total,
            });
        }
        DayOverflow::Strict if day > total => {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: total,
            });
        }
        DayOverflow::Strict => day,
        DayOverflow::Clamp => day.min(total),
    };

    let first = month_cal.first_day_of_month();
    let year_first = if month == 1 {
        first
    } else {
        resolve_month(year, 1)?.first_day_of_month()
    };
    let day_of_year = days_before_month(year, month)? + u16::from(day);

    Ok(CustomCalendar {
        year,
        month,
        day_of_month: day,
        era: Era::Bs,
        first_day_of_month: first,
        last_day_of_month: month_cal.last_day_of_month(),
        total_days_in_month: total,
        day_of_week_in_month: (day - 1) / 7 + 1,
        day_of_week: wrap_weekday(i64::from(first) + i64::from(day) - 1),
        day_of_year,
        week_of_month: week_number(u16::from(day), first),
        week_of_year: week_number(day_of_year, year_first),
    })
}
