use chrono::NaiveDateTime;
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, Component, EventLike};
use tracing::{error, info, instrument};

use crate::model::event::CalendarEvent;
use crate::model::resource::Resource;

pub const RESOURCE_ID_PROPERTY: &str = "X-RESOURCE-ID";
pub const GROUP_ID_PROPERTY: &str = "X-GROUP-ID";

/// iCalendar view of a set of bookings.
pub struct Ical {
    pub calendar: Option<icalendar::Calendar>,
}

/// A booking read back from an ICS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcalBooking {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: Option<u32>,
    pub group_id: Option<String>,
    pub location: String,
}

impl Ical {
    /// Build a calendar with one VEVENT per event, stamped in `tz`.
    #[instrument(level = "debug", skip(events, resources))]
    pub fn from_events(events: &[CalendarEvent], resources: &[Resource], tz: Tz) -> Self {
        let mut calendar = icalendar::Calendar::new();
        calendar.name("Room bookings");

        for (index, event) in events.iter().enumerate() {
            let location = resources
                .iter()
                .find(|r| r.resource_id == event.resource_id)
                .map(|r| r.resource_title.as_str())
                .unwrap_or("");
            let uid = format!(
                "{}-{}-{}@room-booking-calendar",
                index,
                event.resource_id,
                event.start.format("%Y%m%dT%H%M%S")
            );

            let mut vevent = icalendar::Event::new();
            vevent
                .uid(&uid)
                .summary(&event.title)
                .starts(CalendarDateTime::WithTimezone {
                    date_time: event.start,
                    tzid: tz.name().to_string(),
                })
                .ends(CalendarDateTime::WithTimezone {
                    date_time: event.end,
                    tzid: tz.name().to_string(),
                })
                .location(location)
                .add_property(RESOURCE_ID_PROPERTY, event.resource_id.to_string());
            if let Some(group_id) = &event.group_id {
                vevent.add_property(GROUP_ID_PROPERTY, group_id.as_str());
            }
            calendar.push(vevent.done());
        }

        info!(event_count = events.len(), tz = %tz.name(), "Built iCalendar export");
        Self { calendar: Some(calendar) }
    }

    /// Build from a raw ICS string.
    pub fn from_ics(ics: &str) -> Self {
        let calendar = match icalendar::parser::read_calendar(ics) {
            Ok(parsed) => Some(parsed.into()),
            Err(e) => {
                error!(error = %e, "ICS parse error");
                None
            }
        };
        Self { calendar }
    }

    pub fn to_ics(&self) -> Result<String, String> {
        let cal = self.calendar.as_ref().ok_or_else(|| "No ICS available".to_string())?;
        Ok(cal.to_string())
    }

    /// Read every VEVENT back as a booking, in document order.
    pub fn bookings(&self) -> Result<Vec<IcalBooking>, String> {
        let cal = self.calendar.as_ref().ok_or_else(|| "No ICS available".to_string())?;
        let mut out = Vec::new();

        for comp in &cal.components {
            if let icalendar::CalendarComponent::Event(e) = comp {
                let dtstart_s = e.property_value("DTSTART").unwrap_or("");
                let start = parse_dt(dtstart_s)
                    .ok_or_else(|| format!("Invalid DTSTART: {}", dtstart_s))?;
                let dtend_s = e.property_value("DTEND").unwrap_or("");
                let end = parse_dt(dtend_s).ok_or_else(|| format!("Invalid DTEND: {}", dtend_s))?;

                out.push(IcalBooking {
                    summary: e.property_value("SUMMARY").unwrap_or("").to_string(),
                    start,
                    end,
                    resource_id: e
                        .property_value(RESOURCE_ID_PROPERTY)
                        .and_then(|s| s.trim().parse().ok()),
                    group_id: e.property_value(GROUP_ID_PROPERTY).map(|s| s.to_string()),
                    location: e.property_value("LOCATION").unwrap_or("").to_string(),
                });
            }
        }

        Ok(out)
    }
}

fn parse_dt(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    // Wall-clock value; a trailing Z is ignored.
    let s2 = s.strip_suffix('Z').unwrap_or(s);
    for pat in ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M"].iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s2, pat) {
            return Some(dt);
        }
    }
    None
}
