//! Error types for the crate.

use crate::date::Date;

/// Error type for all fallible operations in this crate.
///
/// Validation happens once at the public entry points; nothing is mutated
/// before an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when a year lies outside the tabulated range 1900..=2100.
    #[error("year {year} is out of supported range 1900..=2100")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a date lies outside 1900-01-31..=2100-12-31.
    #[error("date {date} is out of supported range 1900-01-31..=2100-12-31")]
    DateOutOfRange {
        /// The rejected date.
        date: Date,
    },

    /// Returned for malformed date strings or impossible Gregorian dates.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Returned when a lunar month or day does not exist in the given year.
    #[error("invalid lunar date: year {year}, month {month}, day {day}")]
    InvalidLunarDate {
        /// Lunar year.
        year: i32,
        /// Month number as given.
        month: u32,
        /// Day number as given.
        day: u32,
    },

    /// Returned when a solar term key or name is not recognised.
    #[error("unknown solar term: {0}")]
    UnknownSolarTerm(String),
}
