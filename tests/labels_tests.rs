use chrono::{NaiveDate, NaiveTime};

use room_booking_calendar::labels;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn day_range_header_uses_month_slash_day() {
    assert_eq!(labels::day_range_header(date(2025, 3, 14), date(2025, 3, 16)), "3/14 - 3/16");
    assert_eq!(labels::day_range_header(date(2025, 12, 31), date(2026, 1, 2)), "12/31 - 1/2");
}

#[test]
fn day_label_is_short_weekday_and_date() {
    assert_eq!(labels::day_label(date(2025, 3, 14)), "Fri 3/14");
    assert_eq!(labels::weekday_label(date(2025, 3, 16)), "Sun");
}

#[test]
fn headers_use_korean_units() {
    assert_eq!(labels::month_header(date(2025, 3, 14)), "2025년 3월");
    assert_eq!(labels::day_header(date(2025, 3, 14)), "2025년 3월 14일 Friday");
}

#[test]
fn time_gutter_is_zero_padded_24h() {
    let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    assert_eq!(labels::time_gutter_label(t), "09:00");
    let t = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    assert_eq!(labels::time_gutter_label(t), "22:00");
}
