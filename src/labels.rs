use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Toolbar button captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub next: &'static str,
    pub previous: &'static str,
    pub today: &'static str,
    pub month: &'static str,
    pub week: &'static str,
    pub day: &'static str,
}

pub const MESSAGES: Messages = Messages {
    next: ">",
    previous: "<",
    today: "오늘",
    month: "월",
    week: "주",
    day: "일",
};

// chrono strftime patterns for the calendar headers.
pub const DAY_FORMAT: &str = "%a %-m/%-d";
pub const WEEKDAY_FORMAT: &str = "%a";
pub const MONTH_HEADER_FORMAT: &str = "%Y년 %-m월";
pub const DAY_HEADER_FORMAT: &str = "%Y년 %-m월 %-d일 %A";
pub const LONG_DATE_FORMAT: &str = "%Y년 %-m월 %-d일";
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d";
pub const TIME_GUTTER_FORMAT: &str = "%H:%M";

pub fn day_range_header(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format(SHORT_DATE_FORMAT), end.format(SHORT_DATE_FORMAT))
}

pub fn month_header(date: NaiveDate) -> String {
    date.format(MONTH_HEADER_FORMAT).to_string()
}

pub fn day_header(date: NaiveDate) -> String {
    date.format(DAY_HEADER_FORMAT).to_string()
}

/// Column header for one day, e.g. `Fri 3/14`.
pub fn day_label(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Weekday header of the month grid.
pub fn weekday_label(date: NaiveDate) -> String {
    date.format(WEEKDAY_FORMAT).to_string()
}

pub fn time_gutter_label(time: NaiveTime) -> String {
    time.format(TIME_GUTTER_FORMAT).to_string()
}
