//! Civil time in Nepal and the current wall clock.

use chrono::{Datelike, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::date::{Era, SimpleTime};
use crate::error::CalendarError;
use crate::gregorian::resolve_ad_date;
use crate::record::{CustomCalendar, CustomDateTime};
use crate::walk::to_bs;

/// Timezone every [`SimpleTime`] is interpreted in.
pub const CIVIL_TZ: Tz = chrono_tz::Asia::Kathmandu;

/// Resolves a Kathmandu wall-clock instant into a record of the requested era.
pub(crate) fn civil_datetime(local: NaiveDateTime, era: Era) -> Result<CustomDateTime, CalendarError> {
    let (year, month, day) = (local.year(), local.month() as u8, local.day() as u8);
    let calendar = match era {
        Era::Bs => to_bs(year, month, day)?,
        Era::Ad => resolve_ad_date(year, month, day)?,
    };
    let time = SimpleTime::new(
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
        local.nanosecond(),
    )?;
    Ok(CustomDateTime::new(calendar, time))
}

/// Returns the current date and time in Kathmandu.
///
/// # Errors
///
/// Returns [`CalendarError`] if the clock reads outside the supported range.
pub fn now(era: Era) -> Result<CustomDateTime, CalendarError> {
    civil_datetime(Utc::now().with_timezone(&CIVIL_TZ).naive_local(), era)
}

/// Returns today's date in Kathmandu.
///
/// # Errors
///
/// Returns [`CalendarError`] if the clock reads outside the supported range.
pub fn today(era: Era) -> Result<CustomCalendar, CalendarError> {
    now(era).map(|dt| *dt.calendar())
}
