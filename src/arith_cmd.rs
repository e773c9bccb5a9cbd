//! Arithmetic commands: `add-days`, `add-months` and `between`.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sambat_calendar::{ad_days_between, adjust_by_days, days_between, shift_months};
use sambat_format::localize_number;

use crate::cli::{AddDaysArgs, AddMonthsArgs, BetweenArgs};
use crate::convert;
use crate::output::Output;

/// Moves a BS date by a signed number of days.
pub fn run_add_days(args: AddDaysArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("add-days").entered();
    let date = convert::parse_date(&args.date)?;
    let cal = adjust_by_days(date.year(), date.month(), date.day(), args.days)
        .with_context(|| format!("cannot move BS {date} by {} days", args.days))?;
    info!(from = %date, to = %cal.date(), "adjusted");
    println!("{}", out.date(&cal));
    Ok(())
}

/// Moves a BS date by a signed number of months.
pub fn run_add_months(args: AddMonthsArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("add-months").entered();
    let date = convert::parse_date(&args.date)?;
    let cal = shift_months(date, args.months)
        .with_context(|| format!("cannot move BS {date} by {} months", args.months))?;
    if cal.day_of_month() != date.day() {
        info!(requested = date.day(), day = cal.day_of_month(), "day capped at month end");
    }
    println!("{}", out.date(&cal));
    Ok(())
}

/// Prints the signed day count from start to end.
pub fn run_between(args: BetweenArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("between").entered();
    let start = convert::parse_date(&args.start)?;
    let end = convert::parse_date(&args.end)?;
    let days = if args.ad {
        ad_days_between(start, end)
    } else {
        days_between(start, end)
    }
    .with_context(|| format!("cannot count days from {start} to {end}"))?;
    println!("{}", localize_number(&days.to_string(), out.language()));
    Ok(())
}
