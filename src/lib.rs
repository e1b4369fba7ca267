//! Utilities for converting between Gregorian dates and the Chinese lunar
//! calendar.
//!
//! The conversion covers lunar years 1900 to 2100, driven by a packed table of
//! month lengths and leap months. Solar terms come from the century-constant
//! approximation formula with a table of per-year corrections.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use chinese_days::Date;
//!
//! let date: Date = "2000-01-01".parse().unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!((2000, 1, 1), date.gregorian());
//! ```
//!
//! Chinese lunar calendar:
//!
//! ```
//! use chinese_days::{Date, solar_to_lunar, lunar_to_solar};
//!
//! let date = Date::from_gregorian(2057, 9, 28).unwrap();
//! let lunar = solar_to_lunar(date).unwrap();
//!
//! assert_eq!((2057, 8, 30, false), (lunar.lunar_year, lunar.lunar_month, lunar.lunar_day, lunar.is_leap));
//! assert_eq!("丁丑", lunar.year_cyl.to_string());
//! assert_eq!(Some(date), lunar_to_solar(2057, 8, 30).unwrap().date);
//! ```
//!
//! Solar terms:
//!
//! ```
//! use chinese_days::{TermKind, solar_term_date};
//!
//! let date = solar_term_date(2025, TermKind::PureBrightness).unwrap();
//! assert_eq!("2025-04-04", date.to_string());
//! ```

pub mod chinese;
pub mod date;
pub mod error;

pub use chinese::{
    Festival, LeapMonth, LunarDetail, LunarYear, SolarDates, SolarTerm, TermKind,
    lunar_dates_in_range, lunar_festivals, lunar_to_solar, lunar_years, solar_term_date,
    solar_terms_in_range, solar_terms_with_day_index, solar_to_lunar, year_leap_month,
};
pub use date::{Date, YearType};
pub use error::Error;
