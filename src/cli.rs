use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sambat: Bikram Sambat and Gregorian date conversion.
#[derive(Parser)]
#[command(
    name = "sambat",
    version,
    about = "Convert, shift and format Bikram Sambat and Gregorian dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output language, overriding the config file (english, nepali).
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Date layout, overriding the config file (full, long, medium,
    /// short-mdy, short-ymd, compact-mdy, compact-ymd).
    #[arg(short, long, global = true)]
    pub style: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to Bikram Sambat.
    ToBs(DateArgs),
    /// Convert a Bikram Sambat date to Gregorian.
    ToAd(DateArgs),
    /// Move a BS date by a number of days.
    AddDays(AddDaysArgs),
    /// Move a BS date by a number of months, capping the day.
    AddMonths(AddMonthsArgs),
    /// Count days between two dates.
    Between(BetweenArgs),
    /// Print a BS month as a calendar grid.
    Month(MonthArgs),
    /// Render a date with a Unicode-style pattern.
    Format(FormatArgs),
    /// Read an ISO-8601 timestamp as Kathmandu civil time.
    Iso(IsoArgs),
    /// Render a date and Kathmandu time as a UTC ISO-8601 timestamp.
    ToIso(ToIsoArgs),
    /// Print today's date in Kathmandu.
    Today(TodayArgs),
}

/// A single date argument.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as yyyy-mm-dd, yyyy/mm/dd or yyyymmdd (ASCII or Devanagari digits).
    pub date: String,
}

/// Arguments for the `add-days` subcommand.
#[derive(clap::Args)]
pub struct AddDaysArgs {
    /// BS start date.
    pub date: String,

    /// Signed number of days.
    #[arg(allow_hyphen_values = true)]
    pub days: i32,
}

/// Arguments for the `add-months` subcommand.
#[derive(clap::Args)]
pub struct AddMonthsArgs {
    /// BS start date.
    pub date: String,

    /// Signed number of months.
    #[arg(allow_hyphen_values = true)]
    pub months: i32,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// Start date.
    pub start: String,

    /// End date.
    pub end: String,

    /// Treat both dates as Gregorian instead of BS.
    #[arg(long)]
    pub ad: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// BS year.
    pub year: i32,

    /// BS month (1..=12).
    pub month: u8,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date to render.
    pub date: String,

    /// Pattern, e.g. "yyyy MMMM d, EEEE". Falls back to `output.pattern` in the config.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Time of day as HH:MM or HH:MM:SS.
    #[arg(short, long)]
    pub time: Option<String>,

    /// Calendar of the input date (bs, ad).
    #[arg(short, long, default_value = "bs")]
    pub era: String,
}

/// Arguments for the `iso` subcommand.
#[derive(clap::Args)]
pub struct IsoArgs {
    /// ISO-8601 text, e.g. 2020-08-30T18:43:00.502Z.
    pub text: String,

    /// Calendar to report the local date in (bs, ad).
    #[arg(short, long, default_value = "bs")]
    pub era: String,
}

/// Arguments for the `to-iso` subcommand.
#[derive(clap::Args)]
pub struct ToIsoArgs {
    /// Date to render.
    pub date: String,

    /// Kathmandu time of day as HH:MM or HH:MM:SS.
    #[arg(short, long)]
    pub time: Option<String>,

    /// Calendar of the input date (bs, ad).
    #[arg(short, long, default_value = "bs")]
    pub era: String,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Calendar to report in (bs, ad).
    #[arg(short, long, default_value = "bs")]
    pub era: String,

    /// Also print the current time.
    #[arg(long)]
    pub time: bool,
}
