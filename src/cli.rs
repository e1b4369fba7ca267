use clap::{Parser, Subcommand};

use chinese_days::{Date, TermKind};

/// Chinese lunar calendar and solar terms, 1900 to 2100.
#[derive(Parser)]
#[command(
    name = "chinese-days",
    version,
    about = "Chinese lunar calendar and solar terms"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands. Every result is printed as pretty JSON.
#[derive(Subcommand)]
pub enum Command {
    /// Convert Gregorian dates to lunar dates.
    Lunar(RangeArgs),
    /// Convert a lunar date to its Gregorian date(s).
    Solar(SolarArgs),
    /// Show the leap month of a lunar year.
    Leap(YearArgs),
    /// Show stem-branch labels of lunar years.
    Years(YearRangeArgs),
    /// Show the date of one solar term in a year.
    Term(TermArgs),
    /// List solar terms beginning in a date range.
    Terms(TermsArgs),
    /// List lunar folk festivals in a date range.
    Festivals(RangeArgs),
}

/// Inclusive Gregorian date range. `end` defaults to `start`.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date, as YYYY-MM-DD.
    pub start: Date,

    /// Last date, as YYYY-MM-DD.
    pub end: Option<Date>,
}

impl RangeArgs {
    pub fn bounds(&self) -> (Date, Date) {
        (self.start, self.end.unwrap_or(self.start))
    }
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Lunar year.
    pub year: i32,
    /// Lunar month, 1 to 12.
    pub month: u32,
    /// Lunar day, 1 to 30.
    pub day: u32,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year.
    pub year: i32,
}

/// Arguments for the `years` subcommand.
#[derive(clap::Args)]
pub struct YearRangeArgs {
    /// First lunar year.
    pub start: i32,
    /// Last lunar year, defaults to `start`.
    pub end: Option<i32>,
}

/// Arguments for the `term` subcommand.
#[derive(clap::Args)]
pub struct TermArgs {
    /// Gregorian year.
    pub year: i32,
    /// Solar term, by key (e.g. pure_brightness) or Chinese name (e.g. 清明).
    pub term: TermKind,
}

/// Arguments for the `terms` subcommand.
#[derive(clap::Args)]
pub struct TermsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Label every day with its current solar term and day index.
    #[arg(long)]
    pub days: bool,
}
