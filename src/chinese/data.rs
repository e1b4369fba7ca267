//! 农历年表数据
//!
//! 每年一个压缩整数，位布局如下（低位在右）：
//!
//! | 位 | 含义 |
//! |----|------|
//! | `0..=3` | 闰月序号，`0` 表示无闰月 |
//! | `4..=15` | 正月至十二月的大小，最高位为正月；`1` 为大月（30 日），`0` 为小月（29 日） |
//! | `16` | 闰月大小，`1` 为 30 日，`0` 为 29 日；无闰月时不用 |
//!
//! 例如 1900 年的 `0x04bd8`，二进制为 `0 0100 1011 1101 1000`：低四位为 8，即闰八月；
//! 第 16 位为 0，闰月 29 日；正月至十二月依次为 `0100 1011 1101`。
//!
//! 全年日数为 `12 × 29`，加上大月个数，再加上闰月日数。

use super::{FIRST_YEAR, LAST_YEAR, Month, check_year};
use crate::error::Error;

/// 1900–2100 年农历年表，下标为 `year - 1900`。
static LUNAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900..=1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910..=1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920..=1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930..=1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940..=1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950..=1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960..=1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970..=1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980..=1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990..=1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000..=2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010..=2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020..=2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030..=2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040..=2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050..=2059
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060..=2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070..=2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080..=2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090..=2099
    0x0d520, // 2100
];

/// 一个农历年的月份信息，由年表中的压缩整数解码而得。
///
/// 解码只依赖该整数，同一年反复解码结果相同。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::{Month::*, YearInfo};
///
/// let info = YearInfo::get(2023).unwrap();
/// assert_eq!(Some(2), info.leap_month());
/// assert_eq!(Some(29), info.leap_month_days());
/// assert_eq!(384, info.days());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearInfo {
    /// 农历年份
    pub year: i32,
    leap_month: Option<u32>,
    leap_month_days: u32,
    /// 第 11 位为正月，第 0 位为十二月
    big_months: u16,
    days: u32,
}

impl YearInfo {
    /// 取得农历 `year` 年的月份信息。
    ///
    /// 年份不在 1900..=2100 时返回 [`Error::YearOutOfRange`]。
    pub fn get(year: i32) -> Result<Self, Error> {
        check_year(year)?;
        Ok(Self::of(year))
    }

    /// 取得月份信息，调用方须保证 `year` 在 1900..=2100 之间。
    pub(crate) fn of(year: i32) -> Self {
        Self::decode(year, LUNAR_INFO[(year - FIRST_YEAR) as usize])
    }

    /// 解码压缩整数。
    pub fn decode(year: i32, code: u32) -> Self {
        let leap_month = match code & 0xf {
            0 => None,
            m => Some(m),
        };
        let leap_month_days = match leap_month {
            Some(_) if code & 0x10000 != 0 => 30,
            Some(_) => 29,
            None => 0,
        };
        let big_months = ((code >> 4) & 0xfff) as u16;
        let days = 12 * 29 + big_months.count_ones() + leap_month_days;
        Self {
            year,
            leap_month,
            leap_month_days,
            big_months,
            days,
        }
    }

    /// 闰月序号，无闰月时为 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.leap_month
    }
    /// 闰月日数（29 或 30），无闰月时为 `None`。
    pub fn leap_month_days(&self) -> Option<u32> {
        self.leap_month.map(|_| self.leap_month_days)
    }
    /// 平月 `month`（`1..=12`）的日数。
    ///
    /// # Panics
    ///
    /// 若月序号不在 `1..=12` 间则 panic。
    pub fn month_days(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        29 + u32::from(self.big_months >> (12 - month) & 1)
    }
    /// 指定月的日数，闰月须与该年闰月序号相符，否则返回 `None`。
    pub fn days_of(&self, month: Month) -> Option<u32> {
        match month {
            Month::Common(m) if (1..=12).contains(&m) => Some(self.month_days(m)),
            Month::Leap(m) if self.leap_month == Some(m) => Some(self.leap_month_days),
            _ => None,
        }
    }
    /// 全年日数（353–385）。
    pub fn days(&self) -> u32 {
        self.days
    }

    /// 按时间顺序列出全年各月及其日数，闰月紧随同序号的平月之后。
    ///
    /// # 用例
    ///
    /// ```
    /// use chinese_days::chinese::{Month::*, YearInfo};
    ///
    /// let info = YearInfo::get(2001).unwrap();
    /// let months: Vec<_> = info.slots().map(|(m, _)| m).skip(3).take(3).collect();
    /// assert_eq!(vec![Common(4), Leap(4), Common(5)], months);
    /// ```
    pub fn slots(self) -> impl Iterator<Item = (Month, u32)> {
        (1..=12).flat_map(move |m| {
            let leap = (self.leap_month == Some(m)).then_some((Month::Leap(m), self.leap_month_days));
            std::iter::once((Month::Common(m), self.month_days(m))).chain(leap)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn decode_1900() {
        let info = YearInfo::of(1900);
        assert_eq!(Some(8), info.leap_month());
        assert_eq!(Some(29), info.leap_month_days());
        let lens: Vec<_> = (1..=12).map(|m| info.month_days(m)).collect();
        assert_eq!(vec![29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30], lens);
        assert_eq!(384, info.days());
    }

    #[test]
    fn decode_without_leap() {
        let info = YearInfo::of(2024);
        assert_eq!(None, info.leap_month());
        assert_eq!(None, info.leap_month_days());
        assert_eq!(None, info.days_of(Leap(4)));
        assert_eq!(12, info.slots().count());
    }

    #[test]
    fn leap_month_lengths() {
        for (year, std) in [(2001, (4, 29)), (2020, (4, 29)), (2023, (2, 29)), (2025, (6, 29)), (2033, (11, 29)), (2017, (6, 30))] {
            let info = YearInfo::of(year);
            assert_eq!(Some(std), info.leap_month().zip(info.leap_month_days()), "{year}");
        }
    }

    #[test]
    fn decode_is_pure() {
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_eq!(YearInfo::of(year), YearInfo::of(year));
        }
    }

    #[test]
    fn year_lengths_match_slots() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::of(year);
            let total: u32 = info.slots().map(|(_, d)| d).sum();
            assert_eq!(info.days(), total, "{year}");
            assert!((353..=385).contains(&info.days()), "{year}: {}", info.days());
        }
    }

    #[test]
    fn month_lengths_are_29_or_30() {
        for year in FIRST_YEAR..=LAST_YEAR {
            for (month, days) in YearInfo::of(year).slots() {
                assert!(days == 29 || days == 30, "{year} {month:?}: {days}");
            }
        }
    }

    #[test]
    fn at_most_one_leap_slot() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::of(year);
            let leaps: Vec<_> = info.slots().filter(|(m, _)| m.is_leap()).collect();
            match info.leap_month() {
                Some(m) => assert_eq!(vec![(Leap(m), info.leap_month_days)], leaps),
                None => assert!(leaps.is_empty()),
            }
        }
    }

    #[test]
    fn get_rejects_out_of_range() {
        assert_eq!(Err(Error::YearOutOfRange { year: 1899 }), YearInfo::get(1899));
        assert_eq!(Err(Error::YearOutOfRange { year: 2101 }), YearInfo::get(2101));
    }
}
