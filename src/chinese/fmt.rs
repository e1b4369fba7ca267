//! 格式化日期相关功能

use super::Month;
use super::solar_term::TermKind;

/// 天干，第 0 项为「甲」。
pub const STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 地支，第 0 项为「子」。
pub const BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
/// 生肖，与地支一一对应。
pub const ZODIACS: &[&str] = &[
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];
/// 汉数字，第 `1..=9` 项分别为「一」到「九」。为便于格式化日期，第 0 项为「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
/// 逐位书写年份用的数字，第 0 项为「零」。
pub const DIGITS: &[&str] = &["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支计数转为文本形式。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese;
///
/// assert_eq!("甲子", chinese::fmt::sexagenary(0));
/// assert_eq!("乙巳", chinese::fmt::sexagenary(41));
/// ```
pub fn sexagenary(index: i64) -> String {
    super::Sexagenary::from_index(index).to_string()
}

/// 取得农历年的生肖。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese;
///
/// assert_eq!("牛", chinese::fmt::zodiac(2057));
/// ```
pub fn zodiac(lunar_year: i32) -> &'static str {
    ZODIACS[(lunar_year - 4).rem_euclid(12) as usize]
}

/// 逐位写出年份，如「二零五七」。
pub fn year(lunar_year: i32) -> String {
    lunar_year
        .to_string()
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

/// 取得月名（含「月」字）。十一、十二月称「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序号不在 `1..=12` 间则 panic。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日为「初一」到「初十」，第 21 至 29 日为「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序号不在 `1..=30` 间则 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 节气名称。
///
/// # 用例
///
/// ```
/// use chinese_days::chinese::{self, TermKind};
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(TermKind::GrainRain));
/// ```
pub fn solar_term(term: TermKind) -> &'static str {
    const NAMES: &[&str] = &[
        "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
        "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪",
        "大雪", "冬至",
    ];
    NAMES[term as usize]
}
