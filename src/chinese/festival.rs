//! 农历民俗节日
//!
//! 除按农历月日固定的节日外，另有两类按推算确定：
//!
//! - 寒食节：清明前一日；
//! - 除夕一组：农历年最后一日，即次日为正月初一。
//!
//! 闰月不过固定节日。

use serde::Serialize;
use tracing::debug;

use super::Month;
use super::data::YearInfo;
use super::lunar::{LunarDate, lunar_dates_in_range};
use super::solar_term::{TermKind, term_date};
use crate::date::Date;
use crate::error::Error;

/// 按 `(农历月, 农历日, 节日名)` 排列的固定节日。
static FIXED: &[(u32, u32, &[&str])] = &[
    (1, 1, &["春节", "鸡日", "元始天尊诞辰"]),
    (1, 2, &["犬日"]),
    (1, 3, &["猪日", "小年朝"]),
    (1, 4, &["羊日", "孙天医诞辰"]),
    (1, 5, &["牛日", "破五日", "开市", "路神诞辰"]),
    (1, 6, &["马日"]),
    (1, 7, &["人日", "送火神"]),
    (1, 8, &["谷日", "阎王诞辰"]),
    (1, 9, &["天日", "玉皇诞辰"]),
    (1, 10, &["地日", "石头生日"]),
    (1, 13, &["上(试)灯日", "关公升天日"]),
    (1, 15, &["元宵节", "上元节", "正灯日", "天官诞辰"]),
    (1, 18, &["落灯日"]),
    (1, 25, &["天仓(填仓)节"]),
    (2, 1, &["太阳生日"]),
    (2, 2, &["春龙节", "土地公生日", "济公活佛生日"]),
    (2, 3, &["文昌帝君诞辰"]),
    (2, 12, &["百花生日(花朝节)"]),
    (2, 15, &["九天玄女诞辰", "太上老君诞辰", "精忠岳王诞辰"]),
    (2, 19, &["观音菩萨诞辰"]),
    (2, 21, &["普贤菩萨诞辰"]),
    (3, 3, &["上巳节"]),
    (3, 15, &["赵公元帅诞辰", "泰山老母诞辰"]),
    (4, 1, &["祭雹神"]),
    (4, 4, &["文殊菩萨诞辰"]),
    (4, 8, &["浴佛节(龙华会)"]),
    (4, 12, &["蛇王诞辰"]),
    (4, 14, &["吕洞宾诞辰"]),
    (4, 18, &["华佗诞辰"]),
    (4, 28, &["药王(神农)诞辰"]),
    (5, 5, &["端午节"]),
    (5, 13, &["雨节", "黄帝诞辰"]),
    (6, 1, &["半年节"]),
    (6, 6, &["晒衣节"]),
    (6, 19, &["观音菩萨得道"]),
    (6, 24, &["雷神诞辰", "荷花生日", "关公诞辰"]),
    (7, 1, &["祭海神"]),
    (7, 7, &["乞巧节"]),
    (7, 15, &["中元(鬼)节", "地官诞辰(孟兰盆会)"]),
    (7, 18, &["西王母诞辰"]),
    (7, 20, &["棉花生日"]),
    (7, 23, &["诸葛亮诞辰"]),
    (7, 30, &["地藏菩萨诞辰"]),
    (8, 1, &["天医节"]),
    (8, 3, &["灶君生日"]),
    (8, 8, &["瑶池大会"]),
    (8, 15, &["中秋节"]),
    (8, 20, &["水稻生日"]),
    (8, 28, &["孔子诞辰"]),
    (9, 9, &["重阳节"]),
    (9, 19, &["观音菩萨出家"]),
    (10, 1, &["十月朝", "寒衣节"]),
    (10, 15, &["下元节", "水官诞辰"]),
    (12, 8, &["腊八节"]),
    (12, 23, &["官家送灶"]),
    (12, 24, &["民间送灶"]),
    (12, 25, &["接玉皇"]),
];

const COLD_FOOD: &str = "寒食节";
const NEW_YEARS_EVE: &[&str] = &["除夕", "封井", "祭井神", "贴春联", "迎财神"];

/// 某日的全部节日。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Festival {
    /// 公历日期
    pub date: Date,
    /// 节日名，依固定节日、寒食节、除夕一组的顺序
    pub names: Vec<&'static str>,
}

fn fixed(lunar: &LunarDate) -> &'static [&'static str] {
    match lunar.month {
        Month::Common(month) => FIXED
            .iter()
            .find(|&&(m, d, _)| m == month && d == lunar.day)
            .map(|&(_, _, names)| names)
            .unwrap_or_default(),
        Month::Leap(_) => &[],
    }
}

fn is_cold_food(date: Date) -> bool {
    let next = date + 1;
    term_date(next.year(), TermKind::PureBrightness) == next
}

fn is_new_years_eve(lunar: &LunarDate) -> bool {
    YearInfo::of(lunar.year).slots().last() == Some((lunar.month, lunar.day))
}

/// 取得区间内（含两端）有节日的日期及节日名，按日期先后排列，无节日的日期不列出。
///
/// # 用例
///
/// ```
/// use chinese_days::{Date, lunar_festivals};
///
/// let date: Date = "2025-01-29".parse().unwrap();
/// let festivals = lunar_festivals(date, date).unwrap();
///
/// assert_eq!(vec!["春节", "鸡日", "元始天尊诞辰"], festivals[0].names);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
pub fn lunar_festivals(start: Date, end: Date) -> Result<Vec<Festival>, Error> {
    let festivals: Vec<_> = lunar_dates_in_range(start, end)?
        .into_iter()
        .filter_map(|detail| {
            let lunar = detail.lunar();
            let mut names = fixed(&lunar).to_vec();
            if is_cold_food(detail.date) {
                names.push(COLD_FOOD);
            }
            if is_new_years_eve(&lunar) {
                names.extend_from_slice(NEW_YEARS_EVE);
            }
            (!names.is_empty()).then_some(Festival {
                date: detail.date,
                names,
            })
        })
        .collect();
    debug!(count = festivals.len(), "collected festivals");
    Ok(festivals)
}
