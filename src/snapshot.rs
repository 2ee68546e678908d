use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::init::RenderOverrides;
use crate::labels::{self, Messages};
use crate::model::event::CalendarEvent;
use crate::model::resource::Resource;
use crate::style::style_for;
use crate::view::{self, ViewMode, ViewState};

/// An event paired with the class name it renders with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledEvent {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub class_name: String,
}

/// Everything a renderer needs to draw the current view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    pub title: String,
    pub view: ViewMode,
    pub date: NaiveDate,
    pub visible_dates: Vec<NaiveDate>,
    /// `M/D - M/D` span of the visible dates.
    pub range_header: String,
    /// Column headers; empty when the view hides its header row.
    pub headers: Vec<String>,
    pub show_header: bool,
    pub gutter: Vec<String>,
    pub min_time: Option<NaiveTime>,
    pub max_time: Option<NaiveTime>,
    pub step_minutes: u32,
    pub timeslots: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_offset: Option<u32>,
    pub layout_algorithm: &'static str,
    pub selectable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_group_id: Option<String>,
    pub events: Vec<StyledEvent>,
    pub messages: Messages,
    pub overrides: RenderOverrides,
}

impl CalendarSnapshot {
    pub fn build(state: &ViewState, events: &[CalendarEvent], resources: &[Resource]) -> Self {
        let mode = state.view_mode;
        let selected = state.selected_group_id.as_deref();
        let bounds = mode.time_bounds();
        let visible_dates = view::visible_dates(mode, state.reference_date);
        let range_header = match (visible_dates.first(), visible_dates.last()) {
            (Some(first), Some(last)) => labels::day_range_header(*first, *last),
            _ => String::new(),
        };
        let headers = column_headers(mode, &visible_dates);

        let events = events
            .iter()
            .map(|event| StyledEvent {
                event: event.clone(),
                class_name: style_for(event, mode, selected).class_name(),
            })
            .collect();

        CalendarSnapshot {
            title: state.toolbar_title(),
            view: mode,
            date: state.reference_date,
            visible_dates,
            range_header,
            headers,
            show_header: mode.shows_header(),
            gutter: mode.gutter_times().into_iter().map(labels::time_gutter_label).collect(),
            min_time: bounds.map(|(min, _)| min),
            max_time: bounds.map(|(_, max)| max),
            step_minutes: view::STEP_MINUTES,
            timeslots: view::TIMESLOTS,
            event_offset: mode.event_offset(),
            layout_algorithm: view::DAY_LAYOUT_ALGORITHM,
            selectable: view::SELECTABLE,
            resources: view::resources_for(mode, resources).map(<[Resource]>::to_vec),
            selected_group_id: state.selected_group_id.clone(),
            events,
            messages: labels::MESSAGES,
            overrides: state.init.overrides(),
        }
    }
}

// The month grid is headed by weekday names of its first row; time grids by
// one label per day column.
fn column_headers(mode: ViewMode, visible_dates: &[NaiveDate]) -> Vec<String> {
    match mode {
        ViewMode::Day => Vec::new(),
        ViewMode::Week => visible_dates.iter().copied().map(labels::day_label).collect(),
        ViewMode::Month => {
            visible_dates.iter().take(7).copied().map(labels::weekday_label).collect()
        }
    }
}
