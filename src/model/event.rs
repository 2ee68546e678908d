use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A materialized booking as handed to the calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: String,
    pub resource_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl CalendarEvent {
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}
