//! Integration tests for lunar folk festivals.

use chinese_days::chinese::{epoch, last_date};
use chinese_days::{Date, Festival, TermKind, lunar_festivals, solar_term_date, solar_to_lunar};

fn dates_named(festivals: &[Festival], name: &str) -> Vec<Date> {
    festivals
        .iter()
        .filter(|f| f.names.contains(&name))
        .map(|f| f.date)
        .collect()
}

#[test]
fn yearly_festivals_over_whole_table() {
    let festivals = lunar_festivals(epoch(), last_date()).unwrap();

    let new_years = dates_named(&festivals, "春节");
    assert_eq!(201, new_years.len());
    for date in &new_years {
        let lunar = solar_to_lunar(*date).unwrap();
        assert_eq!((1, 1, false), (lunar.lunar_month, lunar.lunar_day, lunar.is_leap));
    }

    // 2100 年除夕已在 2101 年
    let eves = dates_named(&festivals, "除夕");
    assert_eq!(200, eves.len());
    for (eve, new_year) in eves.iter().zip(&new_years[1..]) {
        assert_eq!(1, *new_year - *eve);
    }

    let cold_food = dates_named(&festivals, "寒食节");
    assert_eq!(201, cold_food.len());
    for date in cold_food {
        assert_eq!(date + 1, solar_term_date(date.year(), TermKind::PureBrightness).unwrap());
    }
}

#[test]
fn dates_without_festivals_are_omitted() {
    let festivals = lunar_festivals(epoch(), last_date()).unwrap();
    assert!(festivals.iter().all(|f| !f.names.is_empty()));
    assert!(festivals.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn serialized_shape() {
    let date: Date = "2025-04-03".parse().unwrap();
    let json = serde_json::to_value(lunar_festivals(date, date).unwrap()).unwrap();
    assert_eq!(
        serde_json::json!([{ "date": "2025-04-03", "names": ["寒食节"] }]),
        json
    );
}
