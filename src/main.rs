mod arith_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod format_cmd;
mod logging;
mod month_cmd;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::output::Output;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let out = Output::new(&config, cli.lang.as_deref(), cli.style.as_deref())?;

    match cli.command {
        Command::ToBs(args) => convert_cmd::run_to_bs(args, &out),
        Command::ToAd(args) => convert_cmd::run_to_ad(args, &out),
        Command::AddDays(args) => arith_cmd::run_add_days(args, &out),
        Command::AddMonths(args) => arith_cmd::run_add_months(args, &out),
        Command::Between(args) => arith_cmd::run_between(args, &out),
        Command::Month(args) => month_cmd::run(args, &out),
        Command::Format(args) => format_cmd::run_format(args, &out),
        Command::Iso(args) => format_cmd::run_iso(args, &out),
        Command::ToIso(args) => format_cmd::run_to_iso(args),
        Command::Today(args) => convert_cmd::run_today(args, &out),
    }
}
