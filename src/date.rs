//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A calendar-independant date, counted as a Julian day number (JDN).
///
/// Dates are whole civil days; there is no time-of-day component. At the API
/// boundary they are read and written as ISO 8601 `YYYY-MM-DD` strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Gregorian years accepted by [`Date::from_gregorian`]. JDN 0 falls in
    /// 4714 BC (year -4713), and the JDN arithmetic stays within `i32` up to
    /// the last year.
    pub const YEARS: std::ops::RangeInclusive<i32> = -4712..=999_999;

    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// Returns [`Error::InvalidDate`] if `month` or `day` does not exist, or
    /// if `year` lies outside [`Date::YEARS`].
    ///
    /// # Example
    ///
    /// ```
    /// use chinese_days::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        if !Self::YEARS.contains(&year)
            || !(1..=12).contains(&month)
            || day < 1
            || day > days_in_month(year, month)
        {
            return Err(Error::InvalidDate(format!("{year:04}-{month:02}-{day:02}")));
        }
        Ok(Self::from_gregorian_unchecked(year, month, day))
    }

    /// Creates a `Date` from a Gregorian date known to be valid.
    ///
    /// Callers must pass an existing date after 4713 BC; nothing is checked.
    pub(crate) fn from_gregorian_unchecked(year: i32, month: i32, day: i32) -> Self {
        Self::from_jdn(gregorian_to_jdn(year, month, day) as u32)
    }

    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use chinese_days::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Gregorian year of the date.
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use chinese_days::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

fn gregorian_to_jdn(y: i32, m: i32, d: i32) -> i32 {
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Number of days in a Gregorian month.
pub(crate) fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        write!(f, "{:04}-{:02}-{:02}", y, m, d)
    }
}

/// Parses `YYYY-MM-DD`. Month and day may omit the leading zero.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDate(s.to_owned());
        let mut parts = s.trim().split('-');
        let mut field = || -> Result<i32, Error> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };
        let (y, m, d) = (field()?, field()?, field()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Self::from_gregorian(y, m, d).map_err(|_| invalid())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}
