//! 公历与农历互换
//!
//! 以 1900-01-31 为第 0 日，正向换算先逐年扣除农历年日数定位所在年，再依
//! [`YearInfo::slots`] 逐月扣除定位所在月；反向换算则累加所在日之前的年、月日数。

use serde::Serialize;
use tracing::{debug, trace};

use super::data::YearInfo;
use super::{FIRST_YEAR, LAST_YEAR, Month, Sexagenary, check_date, check_year, epoch, fmt};
use crate::date::Date;
use crate::error::Error;

/// 农历日期。
///
/// `day` 不超过该月日数；`month` 为闰月时必为该年表中所记闰月。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::{LunarDate, Month::*};
///
/// let lunar = LunarDate::new(2001, Leap(4), 5).unwrap();
/// assert_eq!("2001-05-27", lunar.to_date().iso_gregorian());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 农历年份
    pub year: i32,
    /// 月名
    pub month: Month,
    /// 日序号，`1..=30`
    pub day: u32,
}

impl LunarDate {
    /// 构造农历日期，月或日在该年不存在时返回 [`Error::InvalidLunarDate`]。
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, Error> {
        check_year(year)?;
        let invalid = Error::InvalidLunarDate {
            year,
            month: month.num(),
            day,
        };
        match YearInfo::of(year).days_of(month) {
            Some(days) if (1..=days).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(invalid),
        }
    }

    /// 取得公历日期所对应的农历日期。
    ///
    /// 日期须在 1900-01-31..=2100-12-31 之间，否则返回 [`Error::DateOutOfRange`]。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        check_date(date)?;
        Ok(Self::from_offset((date - epoch()) as u32))
    }

    /// 由距起算日的日数定位农历日期，调用方须保证日期在支持范围内。
    pub(crate) fn from_offset(offset: u32) -> Self {
        let mut rest = offset;
        let mut info = YearInfo::of(FIRST_YEAR);
        while rest >= info.days() && info.year < LAST_YEAR {
            rest -= info.days();
            info = YearInfo::of(info.year + 1);
        }
        for (month, days) in info.slots() {
            if rest < days {
                return Self {
                    year: info.year,
                    month,
                    day: rest + 1,
                };
            }
            rest -= days;
        }
        panic!("day offset {} beyond lunar year {}", offset, info.year);
    }

    /// 距起算日的日数。
    pub(crate) fn offset(&self) -> u32 {
        let years: u32 = (FIRST_YEAR..self.year)
            .map(|y| YearInfo::of(y).days())
            .sum();
        let months: u32 = YearInfo::of(self.year)
            .slots()
            .take_while(|&(m, _)| m != self.month)
            .map(|(_, days)| days)
            .sum();
        years + months + self.day - 1
    }

    /// 换算为公历日期。平闰已由 `month` 确定，结果唯一。
    pub fn to_date(&self) -> Date {
        epoch() + self.offset() as i32
    }

    /// 月序号，无论平闰。
    pub fn month_num(&self) -> u32 {
        self.month.num()
    }
    /// 是否闰月。
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
}

/// 公历日期的完整农历信息，含干支、生肖与中文写法。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LunarDetail {
    /// 公历日期
    pub date: Date,
    /// 农历年份
    pub lunar_year: i32,
    /// 农历月份
    pub lunar_month: u32,
    /// 农历日期
    pub lunar_day: u32,
    /// 是否闰月
    pub is_leap: bool,
    /// 年柱
    pub year_cyl: Sexagenary,
    /// 月柱，闰月与其所闰之平月相同
    pub month_cyl: Sexagenary,
    /// 日柱
    pub day_cyl: Sexagenary,
    /// 生肖
    pub zodiac: &'static str,
    /// 年份的中文写法，如「二零五七」
    pub lunar_year_cn: String,
    /// 月份的中文写法，如「八月」「闰四月」
    pub lunar_month_cn: String,
    /// 日期的中文写法，如「三十」
    pub lunar_day_cn: String,
}

impl LunarDetail {
    /// 计算公历日期的农历信息。
    ///
    /// # 用例
    ///
    /// ```
    /// use chinese_days::Date;
    /// use chinese_days::chinese::LunarDetail;
    ///
    /// let detail = LunarDetail::from_date(Date::from_gregorian(2057, 9, 28).unwrap()).unwrap();
    /// assert_eq!((2057, 8, 30, false), (detail.lunar_year, detail.lunar_month, detail.lunar_day, detail.is_leap));
    /// assert_eq!("丁丑", detail.year_cyl.to_string());
    /// assert_eq!("牛", detail.zodiac);
    /// ```
    pub fn from_date(date: Date) -> Result<Self, Error> {
        check_date(date)?;
        let offset = (date - epoch()) as u32;
        let lunar = LunarDate::from_offset(offset);
        trace!(%date, year = lunar.year, month = ?lunar.month, day = lunar.day, "located lunar date");
        Ok(Self::new(date, offset, lunar))
    }

    fn new(date: Date, offset: u32, lunar: LunarDate) -> Self {
        // 月柱自起算日计 14，每过一农历年加 12，闰月不另计
        let month_index = 14 + 12 * i64::from(lunar.year - FIRST_YEAR) + i64::from(lunar.month_num()) - 1;
        Self {
            date,
            lunar_year: lunar.year,
            lunar_month: lunar.month_num(),
            lunar_day: lunar.day,
            is_leap: lunar.is_leap(),
            year_cyl: Sexagenary::for_year(lunar.year),
            month_cyl: Sexagenary::from_index(month_index),
            day_cyl: Sexagenary::from_index(i64::from(offset) + 40),
            zodiac: fmt::zodiac(lunar.year),
            lunar_year_cn: fmt::year(lunar.year),
            lunar_month_cn: fmt::month(lunar.month),
            lunar_day_cn: fmt::day(lunar.day),
        }
    }

    /// 取回农历日期。
    pub fn lunar(&self) -> LunarDate {
        let month = if self.is_leap {
            Month::Leap(self.lunar_month)
        } else {
            Month::Common(self.lunar_month)
        };
        LunarDate {
            year: self.lunar_year,
            month,
            day: self.lunar_day,
        }
    }
}

/// 农历月日对应的公历日期，两者至少有一。
///
/// 闰月大而平月小时，三十日只见于闰月，此时 `date` 为 `None`；反之闰月小时
/// `leap_month_date` 为 `None`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct SolarDates {
    /// 平月中该日
    pub date: Option<Date>,
    /// 闰月中该日，仅当该月为当年闰月所在序号
    pub leap_month_date: Option<Date>,
}

/// 某年的闰月信息。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LeapMonth {
    /// 农历年份
    pub year: i32,
    /// 闰月序号
    pub leap_month: Option<u32>,
    /// 闰月名称，如「闰四月」
    pub leap_month_cn: Option<String>,
    /// 闰月日数
    pub days: Option<u32>,
}

/// 农历年的干支与中文写法。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LunarYear {
    /// 农历年份
    pub year: i32,
    /// 干支纪年，如「庚辰年」
    pub lunar_year: String,
    /// 年份的中文写法，如「二零零零」
    pub lunar_year_cn: String,
}

/// 公历转农历。
///
/// # 用例
///
/// ```
/// use chinese_days::solar_to_lunar;
///
/// let detail = solar_to_lunar("2023-04-20".parse().unwrap()).unwrap();
/// assert_eq!((3, 1, false), (detail.lunar_month, detail.lunar_day, detail.is_leap));
/// ```
pub fn solar_to_lunar(date: Date) -> Result<LunarDetail, Error> {
    LunarDetail::from_date(date)
}

/// 农历转公历。
///
/// `month` 为月序号，平闰两月分别给出同日的公历日期；`day` 只须存在于其中
/// 一月，否则返回 [`Error::InvalidLunarDate`]。
///
/// # 用例
///
/// ```
/// use chinese_days::lunar_to_solar;
///
/// let dates = lunar_to_solar(2001, 4, 5).unwrap();
/// assert_eq!(Some("2001-04-27".to_owned()), dates.date.map(|d| d.iso_gregorian()));
/// assert_eq!(Some("2001-05-27".to_owned()), dates.leap_month_date.map(|d| d.iso_gregorian()));
///
/// // 1906 年四月小、闰四月大
/// let dates = lunar_to_solar(1906, 4, 30).unwrap();
/// assert_eq!(None, dates.date);
/// assert_eq!(Some("1906-06-21".to_owned()), dates.leap_month_date.map(|d| d.iso_gregorian()));
/// ```
pub fn lunar_to_solar(year: i32, month: u32, day: u32) -> Result<SolarDates, Error> {
    check_year(year)?;
    let on = |m: Month| LunarDate::new(year, m, day).ok().map(|lunar| lunar.to_date());
    let dates = SolarDates {
        date: on(Month::Common(month)),
        leap_month_date: on(Month::Leap(month)),
    };
    if dates.date.is_none() && dates.leap_month_date.is_none() {
        return Err(Error::InvalidLunarDate { year, month, day });
    }
    Ok(dates)
}

/// 取得某年闰月。
///
/// # 用例
///
/// ```
/// use chinese_days::year_leap_month;
///
/// let leap = year_leap_month(2023).unwrap();
/// assert_eq!((Some(2), Some(29)), (leap.leap_month, leap.days));
/// assert_eq!(Some("闰二月"), leap.leap_month_cn.as_deref());
/// ```
pub fn year_leap_month(year: i32) -> Result<LeapMonth, Error> {
    let info = YearInfo::get(year)?;
    Ok(LeapMonth {
        year,
        leap_month: info.leap_month(),
        leap_month_cn: info.leap_month().map(|m| fmt::month(Month::Leap(m))),
        days: info.leap_month_days(),
    })
}

/// 取得区间内（含两端）逐日农历信息。`start` 晚于 `end` 时结果为空。
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
pub fn lunar_dates_in_range(start: Date, end: Date) -> Result<Vec<LunarDetail>, Error> {
    check_date(start)?;
    check_date(end)?;
    let first = (start - epoch()) as u32;
    let last = (end - epoch()) as u32;
    let mut details = Vec::with_capacity((last + 1).saturating_sub(first) as usize);
    if first <= last {
        let mut lunar = LunarDate::from_offset(first);
        for offset in first..=last {
            details.push(LunarDetail::new(epoch() + offset as i32, offset, lunar));
            lunar = next_day(lunar);
        }
    }
    debug!(count = details.len(), "collected lunar dates");
    Ok(details)
}

/// 农历次日。
fn next_day(lunar: LunarDate) -> LunarDate {
    let info = YearInfo::of(lunar.year);
    let mut slots = info.slots().skip_while(|&(m, _)| m != lunar.month);
    match slots.next() {
        Some((_, days)) if lunar.day < days => LunarDate {
            day: lunar.day + 1,
            ..lunar
        },
        _ => match slots.next() {
            Some((month, _)) => LunarDate {
                year: lunar.year,
                month,
                day: 1,
            },
            None => LunarDate {
                year: lunar.year + 1,
                month: Month::Common(1),
                day: 1,
            },
        },
    }
}

/// 取得农历年份区间（含两端）的干支与中文写法。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::lunar_years;
///
/// let years = lunar_years(2000, 2001).unwrap();
/// assert_eq!("庚辰年", years[0].lunar_year);
/// assert_eq!("二零零一", years[1].lunar_year_cn);
/// ```
pub fn lunar_years(start: i32, end: i32) -> Result<Vec<LunarYear>, Error> {
    check_year(start)?;
    check_year(end)?;
    Ok((start..=end)
        .map(|year| LunarYear {
            year,
            lunar_year: format!("{}年", Sexagenary::for_year(year)),
            lunar_year_cn: fmt::year(year),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn ymd(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn dates() {
        let data = [
            ((1900, 1, 31), (1900, Common(1), 1)),
            ((2000, 1, 1), (1999, Common(11), 25)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2001, 5, 22), (2001, Common(4), 30)),
            ((2001, 5, 23), (2001, Leap(4), 1)),
            ((2001, 4, 27), (2001, Common(4), 5)),
            ((2001, 5, 27), (2001, Leap(4), 5)),
            ((2025, 1, 28), (2024, Common(12), 29)),
            ((2025, 1, 29), (2025, Common(1), 1)),
            ((2097, 8, 7), (2097, Common(7), 1)),
            ((2100, 12, 31), (2100, Common(12), 1)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let lunar = LunarDate::from_date(ymd(y, m, d)).unwrap();
            assert_eq!((ly, lm, ld), (lunar.year, lunar.month, lunar.day), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn leap_month_boundaries() {
        // 2023 年闰二月：2023-03-22 至 2023-04-19
        let data = [
            ((2023, 3, 21), (Common(2), 30)),
            ((2023, 3, 22), (Leap(2), 1)),
            ((2023, 4, 19), (Leap(2), 29)),
            ((2023, 4, 20), (Common(3), 1)),
        ];
        for ((y, m, d), (lm, ld)) in data {
            let lunar = LunarDate::from_date(ymd(y, m, d)).unwrap();
            assert_eq!((2023, lm, ld), (lunar.year, lunar.month, lunar.day), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn day_after_every_leap_month_is_common() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::of(year);
            let (Some(m), Some(days)) = (info.leap_month(), info.leap_month_days()) else {
                continue;
            };
            let last = LunarDate { year, month: Leap(m), day: days }.to_date();
            let last_lunar = LunarDate::from_date(last).unwrap();
            assert_eq!(Leap(m), last_lunar.month, "{year}");
            assert_eq!(days, last_lunar.day, "{year}");

            if let Ok(next) = LunarDate::from_date(last + 1) {
                assert!(!next.is_leap(), "{year}: {next:?}");
                assert_eq!(1, next.day, "{year}");
                assert_eq!(m % 12 + 1, next.month_num(), "{year}");
            }
        }
    }

    #[test]
    fn out_of_range_dates() {
        assert_eq!(
            Err(Error::DateOutOfRange { date: ymd(1900, 1, 30) }),
            LunarDate::from_date(ymd(1900, 1, 30))
        );
        assert!(LunarDate::from_date(ymd(2101, 1, 1)).is_err());
    }

    #[test]
    fn detail() {
        let detail = LunarDetail::from_date(ymd(2057, 9, 28)).unwrap();
        assert_eq!(
            LunarDetail {
                date: ymd(2057, 9, 28),
                lunar_year: 2057,
                lunar_month: 8,
                lunar_day: 30,
                is_leap: false,
                year_cyl: Sexagenary::for_year(2057),
                month_cyl: Sexagenary { stem: 5, branch: 9 },
                day_cyl: Sexagenary { stem: 4, branch: 0 },
                zodiac: "牛",
                lunar_year_cn: "二零五七".into(),
                lunar_month_cn: "八月".into(),
                lunar_day_cn: "三十".into(),
            },
            detail
        );
        assert_eq!(("丁丑", "己酉", "戊子"), (
            detail.year_cyl.to_string().as_str(),
            detail.month_cyl.to_string().as_str(),
            detail.day_cyl.to_string().as_str(),
        ));
    }

    #[test]
    fn cyclical_labels() {
        let data = [
            ((2097, 8, 7), ("丁巳", "戊申", "丙寅", "蛇")),
            ((2001, 5, 21), ("辛巳", "癸巳", "甲申", "蛇")),
            ((2001, 5, 23), ("辛巳", "癸巳", "丙戌", "蛇")),
            ((2023, 4, 20), ("癸卯", "丙辰", "戊申", "兔")),
            ((1900, 1, 31), ("庚子", "戊寅", "甲辰", "鼠")),
            ((2000, 1, 1), ("己卯", "丙子", "戊午", "兔")),
        ];
        for ((y, m, d), (yc, mc, dc, z)) in data {
            let detail = LunarDetail::from_date(ymd(y, m, d)).unwrap();
            assert_eq!(
                (yc, mc, dc, z),
                (
                    detail.year_cyl.to_string().as_str(),
                    detail.month_cyl.to_string().as_str(),
                    detail.day_cyl.to_string().as_str(),
                    detail.zodiac
                ),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn leap_detail_names() {
        let detail = LunarDetail::from_date(ymd(2001, 5, 24)).unwrap();
        assert!(detail.is_leap);
        assert_eq!("闰四月", detail.lunar_month_cn);
        assert_eq!("初二", detail.lunar_day_cn);
        assert_eq!(LunarDate { year: 2001, month: Leap(4), day: 2 }, detail.lunar());
    }

    #[test]
    fn to_solar() {
        let dates = lunar_to_solar(2001, 3, 5).unwrap();
        assert_eq!(SolarDates { date: Some(ymd(2001, 3, 29)), leap_month_date: None }, dates);
        let dates = lunar_to_solar(2001, 4, 5).unwrap();
        assert_eq!(
            SolarDates { date: Some(ymd(2001, 4, 27)), leap_month_date: Some(ymd(2001, 5, 27)) },
            dates
        );
        let dates = lunar_to_solar(2023, 2, 1).unwrap();
        assert_eq!(Some(ymd(2023, 3, 22)), dates.leap_month_date);
        assert_eq!(Some(ymd(2101, 1, 28)), lunar_to_solar(2100, 12, 29).unwrap().date);
    }

    #[test]
    fn to_solar_skips_missing_leap_day() {
        // 2023 年二月 30 日，闰二月仅 29 日
        let dates = lunar_to_solar(2023, 2, 30).unwrap();
        assert_eq!(Some(ymd(2023, 3, 21)), dates.date);
        assert_eq!(None, dates.leap_month_date);
    }

    #[test]
    fn to_solar_day_only_in_long_leap_month() {
        // 1906 年四月 29 日，闰四月 30 日
        let dates = lunar_to_solar(1906, 4, 30).unwrap();
        assert_eq!(SolarDates { date: None, leap_month_date: Some(ymd(1906, 6, 21)) }, dates);
        let dates = lunar_to_solar(1906, 4, 29).unwrap();
        assert_eq!(
            SolarDates { date: Some(ymd(1906, 5, 22)), leap_month_date: Some(ymd(1906, 6, 20)) },
            dates
        );
        let dates = lunar_to_solar(2017, 6, 30).unwrap();
        assert_eq!(None, dates.date);
        assert_eq!(Some(LunarDate::new(2017, Leap(6), 30).unwrap().to_date()), dates.leap_month_date);
    }

    #[test]
    fn to_solar_rejects_invalid() {
        for (y, m, d) in [(2024, 0, 1), (2024, 13, 1), (2024, 1, 0), (2024, 1, 31), (2001, 3, 30)] {
            assert_eq!(
                Err(Error::InvalidLunarDate { year: y, month: m, day: d }),
                lunar_to_solar(y, m, d)
            );
        }
        assert_eq!(Err(Error::YearOutOfRange { year: 1899 }), lunar_to_solar(1899, 1, 1));
    }

    #[test]
    fn lunar_date_new() {
        assert!(LunarDate::new(2001, Leap(4), 29).is_ok());
        assert!(LunarDate::new(2001, Leap(4), 30).is_err());
        assert!(LunarDate::new(2001, Leap(5), 1).is_err());
        assert!(LunarDate::new(2024, Leap(1), 1).is_err());
    }

    #[test]
    fn leap_month_of_year() {
        assert_eq!(
            LeapMonth { year: 2001, leap_month: Some(4), leap_month_cn: Some("闰四月".into()), days: Some(29) },
            year_leap_month(2001).unwrap()
        );
        assert_eq!(
            LeapMonth { year: 2024, leap_month: None, leap_month_cn: None, days: None },
            year_leap_month(2024).unwrap()
        );
        assert!(year_leap_month(2101).is_err());
    }

    #[test]
    fn dates_in_range() {
        let details = lunar_dates_in_range(ymd(2001, 5, 21), ymd(2001, 5, 26)).unwrap();
        let got: Vec<_> = details.iter().map(|d| (d.lunar_month, d.lunar_day, d.is_leap)).collect();
        assert_eq!(
            vec![(4, 29, false), (4, 30, false), (4, 1, true), (4, 2, true), (4, 3, true), (4, 4, true)],
            got
        );
        assert!(lunar_dates_in_range(ymd(2001, 5, 26), ymd(2001, 5, 21)).unwrap().is_empty());
    }

    #[test]
    fn next_day_matches_search() {
        let start = ymd(1999, 1, 1);
        let details = lunar_dates_in_range(start, ymd(2002, 12, 31)).unwrap();
        for detail in details {
            assert_eq!(LunarDetail::from_date(detail.date).unwrap(), detail);
        }
    }

    #[test]
    fn years() {
        let years = lunar_years(2000, 2003).unwrap();
        let got: Vec<_> = years.iter().map(|y| (y.lunar_year.as_str(), y.lunar_year_cn.as_str())).collect();
        assert_eq!(
            vec![("庚辰年", "二零零零"), ("辛巳年", "二零零一"), ("壬午年", "二零零二"), ("癸未年", "二零零三")],
            got
        );
    }
}
