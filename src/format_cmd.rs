//! Rendering commands: `format`, `iso` and `to-iso`.

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use sambat_calendar::{
    CustomCalendar, DayOverflow, Era, SimpleDate, SimpleTime, from_iso8601, resolve_ad_date,
    resolve_bs_date, to_iso8601,
};
use sambat_format::{format_ad_pattern, format_bs_pattern};

use crate::cli::{FormatArgs, IsoArgs, ToIsoArgs};
use crate::convert;
use crate::output::Output;

/// Renders a date with a pattern from the CLI or the config file.
pub fn run_format(args: FormatArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let Some(pattern) = args.pattern.as_deref().or(out.pattern.as_deref()) else {
        bail!("no pattern given: pass --pattern or set output.pattern in the config");
    };
    let era = convert::parse_era(&args.era)?;
    let date = convert::parse_date(&args.date)?;
    let time = args.time.as_deref().map(convert::parse_time).transpose()?;
    let cal = resolve(date, era)?;

    let text = match era {
        Era::Bs => format_bs_pattern(pattern, &cal, time, out.language()),
        Era::Ad => format_ad_pattern(pattern, &cal, time, out.language()),
    };
    println!("{text}");
    Ok(())
}

/// Reads an ISO-8601 timestamp and prints the Kathmandu local date and time.
pub fn run_iso(args: IsoArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("iso").entered();
    let era = convert::parse_era(&args.era)?;
    let datetime = from_iso8601(&args.text, era)
        .with_context(|| format!("cannot read ISO-8601 timestamp {:?}", args.text))?;
    debug!(date = %datetime.calendar().date(), time = %datetime.time(), "parsed");
    println!("{}", out.datetime(&datetime));
    Ok(())
}

/// Prints a date and Kathmandu time as UTC ISO-8601.
pub fn run_to_iso(args: ToIsoArgs) -> Result<()> {
    let _cmd = info_span!("to-iso").entered();
    let era = convert::parse_era(&args.era)?;
    let date = convert::parse_date(&args.date)?;
    let time = match args.time.as_deref() {
        Some(text) => convert::parse_time(text)?,
        None => SimpleTime::midnight(),
    };
    let text = to_iso8601(date, era, time)
        .with_context(|| format!("cannot render {era} {date} as ISO-8601"))?;
    println!("{text}");
    Ok(())
}

fn resolve(date: SimpleDate, era: Era) -> Result<CustomCalendar> {
    let cal = match era {
        Era::Bs => resolve_bs_date(date.year(), date.month(), date.day(), DayOverflow::Strict),
        Era::Ad => resolve_ad_date(date.year(), date.month(), date.day()),
    };
    cal.with_context(|| format!("{date} is not a valid {era} date"))
}
