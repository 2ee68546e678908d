use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use tracing::{debug, info, instrument};

use crate::model::event::CalendarEvent;
use crate::model::resource::Resource;
use crate::model::rule::{MultiResourceRule, TimeSlotRule};

/// The static tables the generator materializes events from.
#[derive(Debug, Clone)]
pub struct FixtureTables {
    pub resources: Vec<Resource>,
    pub single_rules: Vec<TimeSlotRule>,
    pub multi_rules: Vec<MultiResourceRule>,
}

impl Default for FixtureTables {
    fn default() -> Self {
        Self {
            resources: default_resources(),
            single_rules: default_single_rules(),
            multi_rules: default_multi_rules(),
        }
    }
}

/// The four rooms shown in the day view.
pub fn default_resources() -> Vec<Resource> {
    vec![
        Resource::new(1, "Lecture room"),
        Resource::new(2, "Tissue Lab 1"),
        Resource::new(3, "Tissue Lab 2"),
        Resource::new(4, "Tissue Lab 3"),
    ]
}

pub fn default_single_rules() -> Vec<TimeSlotRule> {
    let rule = |hour, duration_hours, title: &str, target_resource_id| TimeSlotRule {
        hour,
        duration_hours,
        title: title.to_string(),
        user: "홍길동".to_string(),
        target_resource_id,
    };
    vec![
        rule(10, 2, "특별 강의", 1),
        rule(14, 1, "Event", 2),
        rule(18, 2, "Event Name", 3),
        rule(10, 2, "특별 강의", 4),
    ]
}

pub fn default_multi_rules() -> Vec<MultiResourceRule> {
    vec![MultiResourceRule {
        hour: 12,
        duration_hours: 1,
        title: "공동 실험".to_string(),
        resource_ids: vec![2, 3],
    }]
}

/// Truncate a zoned timestamp to the calendar day it falls on.
pub fn reference_day<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// Generate the default fixture events for today in local time.
pub fn generate() -> Vec<CalendarEvent> {
    generate_for(reference_day(&Local::now()))
}

/// Generate the default fixture events for a given day.
pub fn generate_for(day: NaiveDate) -> Vec<CalendarEvent> {
    generate_from(&FixtureTables::default(), day)
}

/// Materialize events from explicit tables.
///
/// Single-resource events come first in resource-major, rule-minor order,
/// followed by multi-resource events in rule-then-resource order. Rules whose
/// target matches no resource contribute nothing.
#[instrument(level = "debug", skip(tables))]
pub fn generate_from(tables: &FixtureTables, day: NaiveDate) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for resource in &tables.resources {
        for rule in &tables.single_rules {
            if rule.target_resource_id != resource.resource_id {
                continue;
            }
            let Some((start, end)) = slot_bounds(day, rule.hour, rule.duration_hours) else {
                debug!(
                    title = %rule.title,
                    hour = rule.hour,
                    "Skipping single-resource rule with an unusable slot"
                );
                continue;
            };
            events.push(CalendarEvent {
                start,
                end,
                title: format!("{}\n{}", rule.target_resource_id, rule.title),
                resource_id: resource.resource_id,
                group_id: None,
            });
        }
    }

    for rule in &tables.single_rules {
        if !tables.resources.iter().any(|r| r.resource_id == rule.target_resource_id) {
            debug!(
                title = %rule.title,
                target = rule.target_resource_id,
                "Rule targets no known resource"
            );
        }
    }

    for rule in &tables.multi_rules {
        let Some((start, end)) = slot_bounds(day, rule.hour, rule.duration_hours) else {
            debug!(
                title = %rule.title,
                hour = rule.hour,
                "Skipping multi-resource rule with an unusable slot"
            );
            continue;
        };
        let group_id = rule.group_id();
        for &resource_id in &rule.resource_ids {
            events.push(CalendarEvent {
                start,
                end,
                title: format!("{}\n{}", resource_id, rule.title),
                resource_id,
                group_id: Some(group_id.clone()),
            });
        }
    }

    info!(%day, event_count = events.len(), "Generated fixture events");
    events
}

// Start and end of a slot on `day`; None when the hour is out of range or the
// duration is empty.
fn slot_bounds(
    day: NaiveDate,
    hour: u32,
    duration_hours: u32,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    if duration_hours == 0 {
        return None;
    }
    let start = day.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
    let end = start.checked_add_signed(TimeDelta::try_hours(i64::from(duration_hours))?)?;
    Some((start, end))
}
