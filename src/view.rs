use std::time::Duration;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::init::InitPhase;
use crate::labels;
use crate::model::event::CalendarEvent;
use crate::model::resource::Resource;

/// Number of days shown by the custom week view.
pub const THREE_DAY_RANGE: u64 = 3;

/// Minutes per time slot in the time grid.
pub const STEP_MINUTES: u32 = 60;

/// Slots per grouped row in the time grid.
pub const TIMESLOTS: u32 = 1;

/// Pixel offset between overlapping events in the three-day view.
pub const THREE_DAY_EVENT_OFFSET: u32 = 15;

/// Overlapping events in a day column are laid out side by side.
pub const DAY_LAYOUT_ALGORITHM: &str = "no-overlap";

/// Empty slots can be clicked to clear a selection.
pub const SELECTABLE: bool = true;

/// First day of a row in the month grid.
pub const WEEK_START: Weekday = Weekday::Sun;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    /// Three consecutive days rendered as a time grid.
    #[default]
    Week,
    Day,
}

impl ViewMode {
    pub fn is_resource_view(self) -> bool {
        matches!(self, ViewMode::Day)
    }

    pub fn is_time_grid(self) -> bool {
        matches!(self, ViewMode::Day | ViewMode::Week)
    }

    /// First and last visible hour of the time grid, if this mode has one.
    pub fn time_bounds(self) -> Option<(NaiveTime, NaiveTime)> {
        if !self.is_time_grid() {
            return None;
        }
        Some((NaiveTime::from_hms_opt(10, 0, 0)?, NaiveTime::from_hms_opt(22, 0, 0)?))
    }

    /// The day view renders its resource columns without a date header.
    pub fn shows_header(self) -> bool {
        !matches!(self, ViewMode::Day)
    }

    pub fn event_offset(self) -> Option<u32> {
        matches!(self, ViewMode::Week).then_some(THREE_DAY_EVENT_OFFSET)
    }

    /// Hour labels down the time grid gutter, one per step from the first to the last hour.
    pub fn gutter_times(self) -> Vec<NaiveTime> {
        let Some((min, max)) = self.time_bounds() else {
            return Vec::new();
        };
        let step = TimeDelta::minutes(i64::from(STEP_MINUTES));
        let mut times = Vec::new();
        let mut t = min;
        while t <= max {
            times.push(t);
            let (next, wrapped) = t.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            t = next;
        }
        times
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavigateAction {
    Prev,
    Next,
    Today,
    Date,
}

/// Days shown by the three-day view, starting at `date`.
pub fn three_day_range(date: NaiveDate) -> Vec<NaiveDate> {
    date.iter_days().take(THREE_DAY_RANGE as usize).collect()
}

pub fn three_day_navigate(
    date: NaiveDate,
    action: NavigateAction,
    today: NaiveDate,
) -> NaiveDate {
    match action {
        NavigateAction::Prev => date.checked_sub_days(Days::new(THREE_DAY_RANGE)).unwrap_or(date),
        NavigateAction::Next => date.checked_add_days(Days::new(THREE_DAY_RANGE)).unwrap_or(date),
        NavigateAction::Today => today,
        NavigateAction::Date => date,
    }
}

pub fn three_day_title(date: NaiveDate) -> String {
    let range = three_day_range(date);
    let first = range.first().copied().unwrap_or(date);
    let last = range.last().copied().unwrap_or(date);
    format!(
        "{} - {}",
        first.format(labels::LONG_DATE_FORMAT),
        last.format(labels::LONG_DATE_FORMAT)
    )
}

/// Move `date` according to the navigation rules of `mode`.
pub fn navigate(
    mode: ViewMode,
    date: NaiveDate,
    action: NavigateAction,
    today: NaiveDate,
) -> NaiveDate {
    match (mode, action) {
        (ViewMode::Week, _) => three_day_navigate(date, action, today),
        (_, NavigateAction::Today) => today,
        (_, NavigateAction::Date) => date,
        (ViewMode::Month, NavigateAction::Prev) => {
            date.checked_sub_months(Months::new(1)).unwrap_or(date)
        }
        (ViewMode::Month, NavigateAction::Next) => {
            date.checked_add_months(Months::new(1)).unwrap_or(date)
        }
        (ViewMode::Day, NavigateAction::Prev) => date.pred_opt().unwrap_or(date),
        (ViewMode::Day, NavigateAction::Next) => date.succ_opt().unwrap_or(date),
    }
}

/// Dates a renderer lays out for `mode` around `date`.
pub fn visible_dates(mode: ViewMode, date: NaiveDate) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Week => three_day_range(date),
        ViewMode::Day => vec![date],
        ViewMode::Month => month_grid(date),
    }
}

/// Whole weeks covering the month of `date`, padded with days of the
/// neighbouring months.
pub fn month_grid(date: NaiveDate) -> Vec<NaiveDate> {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    let start = first.week(WEEK_START).first_day();
    let end = last.week(WEEK_START).last_day();
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Resource columns are only laid out in the day view.
pub fn resources_for(mode: ViewMode, resources: &[Resource]) -> Option<&[Resource]> {
    mode.is_resource_view().then_some(resources)
}

/// Everything the view owns besides the event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
    pub selected_group_id: Option<String>,
    pub init: InitPhase,
}

impl ViewState {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            view_mode: ViewMode::default(),
            selected_group_id: None,
            init: InitPhase::default(),
        }
    }

    pub fn navigate(mut self, action: NavigateAction, today: NaiveDate) -> Self {
        self.reference_date = navigate(self.view_mode, self.reference_date, action, today);
        debug!(date = %self.reference_date, ?action, "Navigated");
        self
    }

    /// Jump to an explicit date, as when a day header is clicked.
    pub fn go_to(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn switch_view(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// Selecting a grouped event highlights its whole group; any other event clears the selection.
    pub fn select_event(mut self, event: &CalendarEvent) -> Self {
        self.selected_group_id = event.group_id.clone();
        debug!(group_id = ?self.selected_group_id, "Selected event");
        self
    }

    pub fn select_slot(mut self) -> Self {
        self.selected_group_id = None;
        self
    }

    pub fn tick(mut self, delta: Duration) -> Self {
        self.init = self.init.tick(delta);
        self
    }

    pub fn toolbar_title(&self) -> String {
        match self.view_mode {
            ViewMode::Month => labels::month_header(self.reference_date),
            ViewMode::Week => three_day_title(self.reference_date),
            ViewMode::Day => labels::day_header(self.reference_date),
        }
    }
}
