use std::collections::HashMap;

use chrono::NaiveDate;

use room_booking_calendar::config::{Config, ConfigError, OutputFormat, DEFAULT_TIMEZONE};
use room_booking_calendar::view::ViewMode;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.timezone, DEFAULT_TIMEZONE);
    assert_eq!(config.view, ViewMode::Week);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn reads_every_variable() {
    let config = Config::from_lookup(lookup(&[
        ("CALENDAR_TIMEZONE", "Europe/Berlin"),
        ("CALENDAR_DATE", "2025-03-14"),
        ("CALENDAR_VIEW", "day"),
        ("CALENDAR_OUTPUT", "ICS"),
    ]))
    .unwrap();
    assert_eq!(config.timezone, chrono_tz::Europe::Berlin);
    assert_eq!(config.reference_day(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(config.view, ViewMode::Day);
    assert_eq!(config.output, OutputFormat::Ics);
}

#[test]
fn blank_values_count_as_unset() {
    let config = Config::from_lookup(lookup(&[("CALENDAR_VIEW", "  ")])).unwrap();
    assert_eq!(config.view, ViewMode::Week);
}

#[test]
fn rejects_bad_values() {
    let err = Config::from_lookup(lookup(&[("CALENDAR_DATE", "14/03/2025")])).unwrap_err();
    assert_eq!(err, ConfigError::Date { var: "CALENDAR_DATE", value: "14/03/2025".to_string() });

    let err = Config::from_lookup(lookup(&[("CALENDAR_TIMEZONE", "Mars/Olympus")])).unwrap_err();
    assert!(err.to_string().contains("Mars/Olympus"));

    assert!(matches!(
        Config::from_lookup(lookup(&[("CALENDAR_VIEW", "agenda")])),
        Err(ConfigError::View { .. })
    ));
    assert!(matches!(
        Config::from_lookup(lookup(&[("CALENDAR_OUTPUT", "csv")])),
        Err(ConfigError::Output { .. })
    ));
}
