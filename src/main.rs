mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use chinese_days::{
    lunar_dates_in_range, lunar_festivals, lunar_to_solar, lunar_years, solar_term_date,
    solar_terms_in_range, solar_terms_with_day_index, year_leap_month,
};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Lunar(args) => {
            let (start, end) = args.bounds();
            info!(%start, %end, "converting to lunar dates");
            print(&lunar_dates_in_range(start, end)?)
        }
        Command::Solar(args) => {
            info!(year = args.year, month = args.month, day = args.day, "converting lunar date");
            print(&lunar_to_solar(args.year, args.month, args.day)?)
        }
        Command::Leap(args) => print(&year_leap_month(args.year)?),
        Command::Years(args) => print(&lunar_years(args.start, args.end.unwrap_or(args.start))?),
        Command::Term(args) => print(&solar_term_date(args.year, args.term)?),
        Command::Terms(args) => {
            let (start, end) = args.range.bounds();
            info!(%start, %end, days = args.days, "listing solar terms");
            if args.days {
                print(&solar_terms_with_day_index(start, end)?)
            } else {
                print(&solar_terms_in_range(start, end)?)
            }
        }
        Command::Festivals(args) => {
            let (start, end) = args.bounds();
            info!(%start, %end, "listing festivals");
            print(&lunar_festivals(start, end)?)
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
