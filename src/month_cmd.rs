//! Month command: print a BS month as a Sunday-first grid.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use sambat_calendar::{NepaliMonthCalendar, resolve_month};
use sambat_format::{
    Language, MonthNames, NameFormat, localize_number, month_name, weekday_name,
};

use crate::cli::MonthArgs;
use crate::output::Output;

const CELL: usize = 5;

/// Prints the grid for one BS month.
pub fn run(args: MonthArgs, out: &Output) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let month = resolve_month(args.year, args.month)
        .with_context(|| format!("cannot resolve BS month {}/{}", args.year, args.month))?;
    debug!(
        first = month.first_day_of_month(),
        days = month.total_days_in_month(),
        "month resolved"
    );
    print!("{}", render_grid(&month, out.language())?);
    Ok(())
}

fn render_grid(month: &NepaliMonthCalendar, language: Language) -> Result<String> {
    let mut grid = String::new();
    let title = month_name(month.month(), MonthNames::Bikram, NameFormat::Full, language)?;
    let year = localize_number(&month.year().to_string(), language);
    writeln!(grid, "{title} {year}")?;

    for day in 1..=7 {
        let name = weekday_name(day, NameFormat::Medium, language)?;
        write!(grid, "{name:>CELL$}")?;
    }
    grid.push('\n');

    let lead = usize::from(month.days_from_start_of_week_to_first_of_month());
    grid.push_str(&" ".repeat(lead * CELL));
    for day in 1..=month.total_days_in_month() {
        let label = localize_number(&day.to_string(), language);
        write!(grid, "{label:>CELL$}")?;
        if (lead + usize::from(day)) % 7 == 0 {
            grid.push('\n');
        }
    }
    if !grid.ends_with('\n') {
        grid.push('\n');
    }
    Ok(grid)
}
