//! Conversion commands: `to-bs`, `to-ad` and `today`.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use sambat_calendar::{Era, now, to_ad, to_bs, today};

use crate::cli::{DateArgs, TodayArgs};
use crate::convert;
use crate::output::Output;

/// Converts a Gregorian date to BS.
pub fn run_to_bs(args: DateArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("to-bs").entered();
    let date = convert::parse_date(&args.date)?;
    let cal = to_bs(date.year(), date.month(), date.day())
        .with_context(|| format!("cannot convert AD {date} to BS"))?;
    debug!(bs = %cal.date(), "converted");
    println!("{}", out.date(&cal));
    Ok(())
}

/// Converts a BS date to Gregorian.
pub fn run_to_ad(args: DateArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("to-ad").entered();
    let date = convert::parse_date(&args.date)?;
    let cal = to_ad(date.year(), date.month(), date.day())
        .with_context(|| format!("cannot convert BS {date} to AD"))?;
    debug!(ad = %cal.date(), "converted");
    println!("{}", out.date(&cal));
    Ok(())
}

/// Prints today's Kathmandu date, optionally with the time.
pub fn run_today(args: TodayArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let era: Era = convert::parse_era(&args.era)?;
    if args.time {
        let current = now(era).context("failed to read the current Kathmandu time")?;
        println!("{}", out.datetime(&current));
    } else {
        let cal = today(era).context("failed to read the current Kathmandu date")?;
        println!("{}", out.date(&cal));
    }
    Ok(())
}
