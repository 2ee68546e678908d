use std::env;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::view::ViewMode;

pub const TIMEZONE_VAR: &str = "CALENDAR_TIMEZONE";
pub const DATE_VAR: &str = "CALENDAR_DATE";
pub const VIEW_VAR: &str = "CALENDAR_VIEW";
pub const OUTPUT_VAR: &str = "CALENDAR_OUTPUT";

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a known IANA time zone: {value}")]
    Timezone { var: &'static str, value: String },
    #[error("{var} must be a YYYY-MM-DD date, got {value}")]
    Date { var: &'static str, value: String },
    #[error("{var} must be month, week or day, got {value}")]
    View { var: &'static str, value: String },
    #[error("{var} must be json or ics, got {value}")]
    Output { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Serialized view snapshot.
    #[default]
    Json,
    /// iCalendar export of the generated events.
    Ics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub timezone: Tz,
    /// Reference day; today in `timezone` when unset.
    pub date: Option<NaiveDate>,
    pub view: ViewMode,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            date: None,
            view: ViewMode::default(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(value) = get(TIMEZONE_VAR) {
            config.timezone = value
                .parse::<Tz>()
                .map_err(|_| ConfigError::Timezone { var: TIMEZONE_VAR, value: value.clone() })?;
        }
        if let Some(value) = get(DATE_VAR) {
            let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|_| ConfigError::Date { var: DATE_VAR, value: value.clone() })?;
            config.date = Some(date);
        }
        if let Some(value) = get(VIEW_VAR) {
            config.view = value
                .parse::<ViewMode>()
                .map_err(|_| ConfigError::View { var: VIEW_VAR, value: value.clone() })?;
        }
        if let Some(value) = get(OUTPUT_VAR) {
            config.output = match value.to_ascii_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "ics" => OutputFormat::Ics,
                _ => return Err(ConfigError::Output { var: OUTPUT_VAR, value }),
            };
        }

        Ok(config)
    }

    /// The configured date, or today in the configured zone.
    pub fn reference_day(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| {
            crate::fixtures::reference_day(&Utc::now().with_timezone(&self.timezone))
        })
    }
}
