//! 二十四节气
//!
//! 采用通用近似公式 `[Y × D + C] − L` 计算节气日期：`Y` 为年份后两位，`D = 0.2422`，
//! `C` 为节气按世纪取的常数，`L` 为闰年数（小寒、大寒、立春、雨水四节气在公历
//! 闰日之前，取 `[(Y − 1) / 4]`，其余取 `[Y / 4]`）。公式与实测不合之年见
//! [`CORRECTIONS`]。
//!
//! 每个节气固定落在某一公历月，每月两个节气。

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_year, fmt};
use crate::date::Date;
use crate::error::Error;

/// 节气，按公历年内先后排列，小寒在前，冬至在后。
///
/// 序列化为 [`TermKind::key`]；另接受旧键名，如 `the_winter_solstice`、`code_dew`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    LesserCold,
    GreaterCold,
    #[serde(alias = "the_beginning_of_spring")]
    BeginningOfSpring,
    RainWater,
    #[serde(alias = "the_waking_of_insects")]
    WakingOfInsects,
    #[serde(alias = "the_spring_equinox")]
    SpringEquinox,
    PureBrightness,
    GrainRain,
    #[serde(alias = "the_beginning_of_summer")]
    BeginningOfSummer,
    LesserFullnessOfGrain,
    GrainInBeard,
    #[serde(alias = "the_summer_solstice")]
    SummerSolstice,
    LesserHeat,
    GreaterHeat,
    #[serde(alias = "the_beginning_of_autumn")]
    BeginningOfAutumn,
    #[serde(alias = "the_end_of_heat")]
    EndOfHeat,
    WhiteDew,
    #[serde(alias = "the_autumn_equinox")]
    AutumnEquinox,
    #[serde(alias = "code_dew")]
    ColdDew,
    FrostDescent,
    #[serde(alias = "the_beginning_of_winter")]
    BeginningOfWinter,
    LesserSnow,
    GreaterSnow,
    #[serde(alias = "the_winter_solstice")]
    WinterSolstice,
}

impl TermKind {
    /// 全部节气，按公历年内先后排列。
    pub const ALL: [TermKind; 24] = {
        use TermKind::*;
        [
            LesserCold,
            GreaterCold,
            BeginningOfSpring,
            RainWater,
            WakingOfInsects,
            SpringEquinox,
            PureBrightness,
            GrainRain,
            BeginningOfSummer,
            LesserFullnessOfGrain,
            GrainInBeard,
            SummerSolstice,
            LesserHeat,
            GreaterHeat,
            BeginningOfAutumn,
            EndOfHeat,
            WhiteDew,
            AutumnEquinox,
            ColdDew,
            FrostDescent,
            BeginningOfWinter,
            LesserSnow,
            GreaterSnow,
            WinterSolstice,
        ]
    };

    /// 落在公历 `month` 月的两个节气。
    ///
    /// # Panics
    ///
    /// 若月序号不在 `1..=12` 间则 panic。
    pub(crate) fn for_month(month: u32) -> [TermKind; 2] {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        let i = (month as usize - 1) * 2;
        [Self::ALL[i], Self::ALL[i + 1]]
    }
    /// 节气所在公历月。
    pub fn month(self) -> u32 {
        self as u32 / 2 + 1
    }
    /// 中文名称。
    pub fn name(self) -> &'static str {
        fmt::solar_term(self)
    }
    /// 英文键名，如 `pure_brightness`。
    pub fn key(self) -> &'static str {
        const KEYS: [&str; 24] = [
            "lesser_cold",
            "greater_cold",
            "beginning_of_spring",
            "rain_water",
            "waking_of_insects",
            "spring_equinox",
            "pure_brightness",
            "grain_rain",
            "beginning_of_summer",
            "lesser_fullness_of_grain",
            "grain_in_beard",
            "summer_solstice",
            "lesser_heat",
            "greater_heat",
            "beginning_of_autumn",
            "end_of_heat",
            "white_dew",
            "autumn_equinox",
            "cold_dew",
            "frost_descent",
            "beginning_of_winter",
            "lesser_snow",
            "greater_snow",
            "winter_solstice",
        ];
        KEYS[self as usize]
    }

    /// 公式常数 `C`，`[20 世纪, 21 世纪]`。
    fn coefficients(self) -> [f64; 2] {
        const C: [[f64; 2]; 24] = [
            [6.11, 5.4055],
            [20.84, 20.12],
            [4.6295, 3.87],
            [19.4599, 18.73],
            [6.3926, 5.63],
            [21.4155, 20.646],
            [5.59, 4.81],
            [20.888, 20.1],
            [6.318, 5.52],
            [21.86, 21.04],
            [6.5, 5.678],
            [22.2, 21.37],
            [7.928, 7.108],
            [23.65, 22.83],
            [8.35, 7.5],
            [23.95, 23.13],
            [8.44, 7.646],
            [23.822, 23.042],
            [9.098, 8.318],
            [24.218, 23.438],
            [8.218, 7.438],
            [23.08, 22.36],
            [7.9, 7.18],
            [22.6, 21.94],
        ];
        C[self as usize]
    }

    /// 是否在公历闰日之前，闰年数须少计一年。
    fn before_leap_day(self) -> bool {
        use TermKind::*;
        matches!(self, LesserCold | GreaterCold | BeginningOfSpring | RainWater)
    }
}

/// 旧键名。
static LEGACY_KEYS: &[(&str, TermKind)] = {
    use TermKind::*;
    &[
        ("the_beginning_of_spring", BeginningOfSpring),
        ("the_waking_of_insects", WakingOfInsects),
        ("the_spring_equinox", SpringEquinox),
        ("the_beginning_of_summer", BeginningOfSummer),
        ("the_summer_solstice", SummerSolstice),
        ("the_beginning_of_autumn", BeginningOfAutumn),
        ("the_end_of_heat", EndOfHeat),
        ("the_autumn_equinox", AutumnEquinox),
        ("code_dew", ColdDew),
        ("the_beginning_of_winter", BeginningOfWinter),
        ("the_winter_solstice", WinterSolstice),
    ]
};

/// 接受英文键名、旧键名或中文名称。
impl FromStr for TermKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|term| term.key() == s || term.name() == s)
            .or_else(|| LEGACY_KEYS.iter().find(|&&(key, _)| key == s).map(|&(_, term)| term))
            .ok_or_else(|| Error::UnknownSolarTerm(s.to_owned()))
    }
}

/// 公式结果与实测相差一日的年份及修正值。
pub static CORRECTIONS: &[(i32, TermKind, i32)] = {
    use TermKind::*;
    &[
        (1902, GrainInBeard, 1),
        (1911, BeginningOfSummer, 1),
        (1918, WinterSolstice, -1),
        (1922, GreaterHeat, 1),
        (1925, LesserHeat, 1),
        (1927, WhiteDew, 1),
        (1928, SummerSolstice, 1),
        (1942, AutumnEquinox, 1),
        (1954, GreaterSnow, 1),
        (1978, LesserSnow, 1),
        (1982, LesserCold, 1),
        (2002, BeginningOfAutumn, 1),
        (2008, LesserFullnessOfGrain, 1),
        (2016, LesserHeat, 1),
        (2019, LesserCold, -1),
        (2021, WinterSolstice, -1),
        (2026, RainWater, -1),
        (2082, GreaterCold, 1),
        (2084, SpringEquinox, 1),
        (2089, FrostDescent, 1),
        (2089, BeginningOfWinter, 1),
    ]
};

fn correction(year: i32, term: TermKind) -> i32 {
    CORRECTIONS
        .iter()
        .find(|&&(y, t, _)| y == year && t == term)
        .map_or(0, |&(_, _, delta)| delta)
}

/// 计算节气日期，调用方须保证年份在 1899..=2101 之间。
pub(crate) fn term_date(year: i32, term: TermKind) -> Date {
    let y = year.rem_euclid(100);
    let c = term.coefficients()[usize::from(year >= 2000)];
    let leaps = if term.before_leap_day() {
        (y - 1).div_euclid(4)
    } else {
        y.div_euclid(4)
    };
    let day = (f64::from(y) * 0.2422 + c).floor() as i32 - leaps + correction(year, term);
    Date::from_gregorian_unchecked(year, term.month() as i32, day)
}

/// 节气信息。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SolarTerm {
    /// 公历日期
    pub date: Date,
    /// 节气
    pub term: TermKind,
    /// 中文名称
    pub name: &'static str,
    /// `date` 为该节气的第几日，交节当日为 1
    pub day_index: Option<u8>,
}

impl SolarTerm {
    fn new(date: Date, term: TermKind, day_index: u8) -> Self {
        Self {
            date,
            term,
            name: term.name(),
            day_index: Some(day_index),
        }
    }
}

/// 取得某年某节气的日期。
///
/// # 用例
///
/// ```
/// use chinese_days::{TermKind, solar_term_date};
///
/// let date = solar_term_date(2026, TermKind::RainWater).unwrap();
/// assert_eq!("2026-02-18", date.iso_gregorian());
/// ```
pub fn solar_term_date(year: i32, term: TermKind) -> Result<Date, Error> {
    check_year(year)?;
    Ok(term_date(year, term))
}

/// 以 `year * 12 + month - 1` 计数的月份，含两端。
fn months(start: Date, end: Date) -> impl Iterator<Item = (i32, u32)> {
    let index = |date: Date| {
        let (y, m, _) = date.gregorian();
        y * 12 + m - 1
    };
    (index(start)..=index(end)).map(|i| (i.div_euclid(12), i.rem_euclid(12) as u32 + 1))
}

fn check_range(start: Date, end: Date) -> Result<(), Error> {
    check_year(start.year())?;
    check_year(end.year())
}

/// 取得区间内（含两端）交节的节气，按日期先后排列。
///
/// 逐月计算该月两个节气，只保留落在区间内者。
///
/// # 用例
///
/// ```
/// use chinese_days::{Date, TermKind, solar_terms_in_range};
///
/// let start: Date = "2024-01-01".parse().unwrap();
/// let end: Date = "2024-01-31".parse().unwrap();
/// let terms = solar_terms_in_range(start, end).unwrap();
///
/// assert_eq!(vec![TermKind::LesserCold, TermKind::GreaterCold], terms.iter().map(|t| t.term).collect::<Vec<_>>());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
pub fn solar_terms_in_range(start: Date, end: Date) -> Result<Vec<SolarTerm>, Error> {
    check_range(start, end)?;
    let terms: Vec<_> = months(start, end)
        .flat_map(|(year, month)| TermKind::for_month(month).map(|term| (term_date(year, term), term)))
        .filter(|(date, _)| (start..=end).contains(date))
        .map(|(date, term)| SolarTerm::new(date, term, 1))
        .collect();
    debug!(count = terms.len(), "collected solar terms");
    Ok(terms)
}

/// 取得区间内（含两端）逐日所在节气及其为该节气第几日。
///
/// 先计算区间前后各多一个月的全部节气并按日期排序，再将每一日归入不晚于它的最近一个节气。
///
/// # 用例
///
/// ```
/// use chinese_days::{Date, TermKind, solar_terms_with_day_index};
///
/// let date: Date = "2024-01-04".parse().unwrap();
/// let terms = solar_terms_with_day_index(date, date).unwrap();
///
/// assert_eq!(TermKind::WinterSolstice, terms[0].term);
/// assert_eq!(Some(14), terms[0].day_index);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
pub fn solar_terms_with_day_index(start: Date, end: Date) -> Result<Vec<SolarTerm>, Error> {
    check_range(start, end)?;
    let mut boundaries: Vec<(Date, TermKind)> = months(start + -31, end + 31)
        .flat_map(|(year, month)| TermKind::for_month(month).map(|term| (term_date(year, term), term)))
        .collect();
    boundaries.sort();

    let mut terms = Vec::new();
    for pair in boundaries.windows(2) {
        let ((begin, term), (next, _)) = (pair[0], pair[1]);
        let mut date = begin.max(start);
        while date < next && date <= end {
            terms.push(SolarTerm::new(date, term, (date - begin + 1) as u8));
            date = date + 1;
        }
    }
    debug!(count = terms.len(), "labelled dates with solar terms");
    Ok(terms)
}
