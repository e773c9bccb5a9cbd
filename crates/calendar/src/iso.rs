//! ISO-8601 ingestion and UTC rendering.
//!
//! Accepted input profile:
//!
//! | Form | Example |
//! |------|---------|
//! | date only | `2011-11-04` |
//! | naive date-time (`T` or space) | `2011-11-04 00:05:23.283` |
//! | UTC designator | `2020-08-30T18:43:00.502Z` |
//! | numeric offset | `+04:00`, `+0530`, `+00:00:00`, `-05` |
//!
//! Inputs without an offset are Kathmandu wall time.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

use crate::civil::{CIVIL_TZ, civil_datetime};
use crate::date::{Era, SimpleDate, SimpleTime};
use crate::error::CalendarError;
use crate::gregorian::naive_date;
use crate::record::CustomDateTime;
use crate::walk::to_ad;

/// Parses an ISO-8601 timestamp into a Kathmandu-local record of `era`.
///
/// # Errors
///
/// Returns [`CalendarError::Parse`] for malformed text, or a range error if
/// the local date is outside the supported window.
#[tracing::instrument(level = "debug")]
pub fn from_iso8601(text: &str, era: Era) -> Result<CustomDateTime, CalendarError> {
    civil_datetime(parse_civil(text.trim())?, era)
}

/// Renders a date and Kathmandu time as a UTC ISO-8601 timestamp.
///
/// Fractional seconds appear as microseconds and only when nonzero.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is invalid in its calendar, or
/// [`CalendarError::NonexistentLocalTime`] if the wall-clock time was
/// skipped by a Kathmandu offset change.
pub fn to_iso8601(date: SimpleDate, era: Era, time: SimpleTime) -> Result<String, CalendarError> {
    let ad = match era {
        Era::Bs => to_ad(date.year(), date.month(), date.day())?.date(),
        Era::Ad => date,
    };
    let local = naive_date(ad.year(), ad.month(), ad.day())?
        .and_hms_nano_opt(
            u32::from(time.hour()),
            u32::from(time.minute()),
            u32::from(time.second()),
            time.nanosecond(),
        )
        .ok_or_else(|| CalendarError::parse(&time.to_string(), "time out of range"))?;
    let utc = CIVIL_TZ
        .from_local_datetime(&local)
        .earliest()
        .ok_or(CalendarError::NonexistentLocalTime { local })?
        .with_timezone(&Utc);

    let mut out = utc.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = utc.nanosecond() / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out.push('Z');
    Ok(out)
}

/// Parses text into Kathmandu local date-time.
fn parse_civil(text: &str) -> Result<NaiveDateTime, CalendarError> {
    let (date_part, time_part) = match text.split_once(['T', 't', ' ']) {
        Some((d, t)) => (d, Some(t.trim())),
        None => (text, None),
    };
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| CalendarError::parse(text, e.to_string()))?;
    let Some(time_part) = time_part else {
        return Ok(date.and_time(NaiveTime::MIN));
    };

    let (clock, offset) = split_offset(time_part);
    let clock = NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .map_err(|e| CalendarError::parse(text, e.to_string()))?;
    let naive = date.and_time(clock);

    match offset {
        None => Ok(naive),
        Some(offset) => {
            let offset = parse_offset(text, offset)?;
            let instant = offset
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| CalendarError::parse(text, "ambiguous offset time"))?;
            Ok(instant.with_timezone(&CIVIL_TZ).naive_local())
        }
    }
}

/// Splits `HH:MM:SS.fff+HH:MM` into clock and offset text.
fn split_offset(time: &str) -> (&str, Option<&str>) {
    if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        return (clock, Some("Z"));
    }
    match time.rfind(['+', '-']) {
        Some(i) => (&time[..i], Some(&time[i..])),
        None => (time, None),
    }
}

fn parse_offset(input: &str, offset: &str) -> Result<FixedOffset, CalendarError> {
    let bad = || CalendarError::parse(input, format!("invalid UTC offset {offset:?}"));
    if offset == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(bad);
    }
    let (sign, body) = match offset.split_at(1) {
        ("+", body) => (1, body),
        ("-", body) => (-1, body),
        _ => return Err(bad()),
    };
    let fields: Vec<&str> = if body.contains(':') {
        body.split(':').collect()
    } else if body.len() % 2 == 0 && body.is_ascii() {
        (0..body.len()).step_by(2).map(|i| &body[i..i + 2]).collect()
    } else {
        return Err(bad());
    };
    if fields.is_empty() || fields.len() > 3 {
        return Err(bad());
    }

    let mut seconds = 0i32;
    for (field, scale) in fields.iter().zip([3600, 60, 1]) {
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let value: i32 = field.parse().map_err(|_| bad())?;
        seconds += value * scale;
    }
    FixedOffset::east_opt(sign * seconds).ok_or_else(bad)
}
