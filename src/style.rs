use serde::Serialize;

use crate::model::event::CalendarEvent;
use crate::view::ViewMode;

pub const SPECIAL_CLASS: &str = "rbc-event-special";
pub const MONTH_CLASS: &str = "rbc-event-month";
pub const TIME_CLASS: &str = "rbc-event-time";
pub const SELECTED_CLASS: &str = "rbc-event-selected";

/// Marker in an event title that flags it as a special lecture.
pub const SPECIAL_MARKER: &str = "특별";

/// Class names applied to one rendered event, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    pub class_names: Vec<&'static str>,
}

impl EventStyle {
    pub fn class_name(&self) -> String {
        self.class_names.join(" ")
    }

    pub fn contains(&self, class: &str) -> bool {
        self.class_names.iter().any(|c| *c == class)
    }
}

pub fn style_for(
    event: &CalendarEvent,
    view_mode: ViewMode,
    selected_group_id: Option<&str>,
) -> EventStyle {
    let mut class_names = Vec::with_capacity(3);
    if event.title.contains(SPECIAL_MARKER) {
        class_names.push(SPECIAL_CLASS);
    }
    class_names.push(match view_mode {
        ViewMode::Month => MONTH_CLASS,
        ViewMode::Week | ViewMode::Day => TIME_CLASS,
    });
    if selected_group_id.is_some() && event.group_id.as_deref() == selected_group_id {
        class_names.push(SELECTED_CLASS);
    }
    EventStyle { class_names }
}
