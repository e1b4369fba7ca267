//! Chinese calendar
//!
//! Note: 为方便处理诸多术语，本模块文档用中文。
//!
//! 农历部分采用 1900–2100 年逐年压缩编码的月份大小表（见 [`data`]），由公历
//! 1900-01-31（农历庚子年正月初一）起逐年、逐月累计日数换算；节气部分采用
//! 按世纪取常数的线性近似公式并辅以逐年修正表（见 [`solar_term`]）。
//!
//! # 用例
//!
//! ```
//! use chinese_days::Date;
//! use chinese_days::chinese::{LunarDate, Month::*};
//!
//! let date = Date::from_gregorian(2023, 4, 19).unwrap();
//! let lunar = LunarDate::from_date(date).unwrap();
//!
//! assert_eq!((2023, Leap(2), 29), (lunar.year, lunar.month, lunar.day));
//! ```

use serde::{Serialize, Serializer};

use crate::date::Date;
use crate::error::Error;

pub mod data;
pub mod festival;
pub mod fmt;
pub mod lunar;
pub mod solar_term;

pub use data::YearInfo;
pub use festival::{Festival, lunar_festivals};
pub use lunar::{
    LeapMonth, LunarDate, LunarDetail, LunarYear, SolarDates, lunar_dates_in_range,
    lunar_to_solar, lunar_years, solar_to_lunar, year_leap_month,
};
pub use solar_term::{
    SolarTerm, TermKind, solar_term_date, solar_terms_in_range, solar_terms_with_day_index,
};

/// 支持的首个年份。
pub const FIRST_YEAR: i32 = 1900;
/// 支持的末个年份。
pub const LAST_YEAR: i32 = 2100;

/// 农历起算日：公历 1900-01-31，即庚子年正月初一，内部日数偏移量的第 0 日。
pub fn epoch() -> Date {
    Date::from_gregorian_unchecked(FIRST_YEAR, 1, 31)
}

/// 可换算为农历的最末一日。
pub fn last_date() -> Date {
    Date::from_gregorian_unchecked(LAST_YEAR, 12, 31)
}

/// 检查年份是否在 1900..=2100 之间。
pub(crate) fn check_year(year: i32) -> Result<(), Error> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::YearOutOfRange { year })
    }
}

/// 检查日期是否在 1900-01-31..=2100-12-31 之间。
pub(crate) fn check_date(date: Date) -> Result<(), Error> {
    if (epoch()..=last_date()).contains(&date) {
        Ok(())
    } else {
        Err(Error::DateOutOfRange { date })
    }
}

/// 月名，`Common` 为平月，`Leap` 为闰月。
///
/// 一个 `(月序号, 平闰)` 组合唯一确定一年中的某个月；每年至多一个闰月，且其
/// 序号与该年表中所记闰月相同。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序号，无论平闰。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 闰月为 `true`，平月为 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月称「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 干支，`stem` 为天干序号（`0..=9`，甲至癸），`branch` 为地支序号（`0..=11`，子至亥）。
///
/// 以六十为周期循环。年、月、日三柱各自独立计数：年柱以 1864 年（甲子）起算，
/// 月柱自起算日计 14，日柱自起算日计 40。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::Sexagenary;
///
/// assert_eq!("丁丑", Sexagenary::for_year(2057).to_string());
/// assert_eq!(Sexagenary::from_index(7), Sexagenary::from_index(67));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sexagenary {
    pub stem: u8,
    pub branch: u8,
}

impl Sexagenary {
    /// 由循环计数取干支，天干取模 10，地支取模 12。
    pub fn from_index(index: i64) -> Self {
        Self {
            stem: index.rem_euclid(10) as u8,
            branch: index.rem_euclid(12) as u8,
        }
    }
    /// 取得农历年的干支（年柱）。
    pub fn for_year(lunar_year: i32) -> Self {
        Self::from_index(i64::from(lunar_year) - 1864)
    }
    /// 在六十干支中的序号，`0` 为甲子，`59` 为癸亥。
    pub fn ordinal(&self) -> u8 {
        // 满足 n ≡ stem (mod 10)、n ≡ branch (mod 12) 的唯一 n
        (6 * self.stem as i32 - 5 * self.branch as i32).rem_euclid(60) as u8
    }
}

impl std::fmt::Display for Sexagenary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(fmt::STEMS[self.stem as usize])?;
        f.write_str(fmt::BRANCHES[self.branch as usize])
    }
}

impl Serialize for Sexagenary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
