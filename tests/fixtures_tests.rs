use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Asia::Seoul;

use room_booking_calendar::fixtures::{self, FixtureTables};
use room_booking_calendar::model::resource::Resource;
use room_booking_calendar::model::rule::{MultiResourceRule, TimeSlotRule};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn at(hour: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, 0, 0).unwrap()
}

#[test]
fn default_tables_produce_six_events() {
    let events = fixtures::generate_for(day());
    assert_eq!(events.len(), 6);
    assert_eq!(events.iter().filter(|e| e.group_id.is_none()).count(), 4);
    assert_eq!(events.iter().filter(|e| e.group_id.is_some()).count(), 2);
}

#[test]
fn special_lecture_lands_in_lecture_room() {
    let events = fixtures::generate_for(day());
    let lecture: Vec<_> = events.iter().filter(|e| e.resource_id == 1).collect();
    assert_eq!(lecture.len(), 1);

    let e = lecture[0];
    assert_eq!(e.start, at(10));
    assert_eq!(e.end, at(12));
    assert_eq!(e.title, "1\n특별 강의");
    assert_eq!(e.group_id, None);
    assert_eq!(e.duration_hours(), 2);
}

#[test]
fn joint_experiment_spans_two_labs_with_one_group() {
    let events = fixtures::generate_for(day());
    let joint: Vec<_> = events.iter().filter(|e| e.title.ends_with("공동 실험")).collect();
    assert_eq!(joint.len(), 2);
    assert_eq!(joint[0].resource_id, 2);
    assert_eq!(joint[1].resource_id, 3);

    let group = joint[0].group_id.as_deref().expect("joint event should be grouped");
    assert!(!group.is_empty());
    assert_eq!(group, "공동 실험-12");
    assert_eq!(joint[1].group_id.as_deref(), Some(group));
    for e in joint {
        assert_eq!(e.start, at(12));
        assert_eq!(e.end, at(13));
    }
}

#[test]
fn events_are_ordered_resource_major_then_groups() {
    let events = fixtures::generate_for(day());
    let order: Vec<(u32, Option<&str>)> =
        events.iter().map(|e| (e.resource_id, e.group_id.as_deref())).collect();
    assert_eq!(
        order,
        vec![
            (1, None),
            (2, None),
            (3, None),
            (4, None),
            (2, Some("공동 실험-12")),
            (3, Some("공동 실험-12")),
        ]
    );
}

#[test]
fn every_event_uses_a_known_resource_and_has_positive_length() {
    let known: HashSet<u32> = fixtures::default_resources().iter().map(|r| r.resource_id).collect();
    for e in fixtures::generate_for(day()) {
        assert!(known.contains(&e.resource_id), "unexpected resource {}", e.resource_id);
        assert!(e.start < e.end);
        assert_eq!(e.start.date(), day());
        assert_eq!(e.end.date(), day());
    }
}

#[test]
fn regenerating_on_the_same_day_is_stable() {
    let a = fixtures::generate_for(day());
    let b = fixtures::generate_for(day());
    assert_eq!(a, b);

    let now_a = fixtures::generate();
    let now_b = fixtures::generate();
    let key = |e: &room_booking_calendar::model::event::CalendarEvent| {
        (e.resource_id, e.group_id.clone(), e.title.clone(), e.duration_hours())
    };
    assert_eq!(now_a.len(), now_b.len());
    assert_eq!(
        now_a.iter().map(key).collect::<Vec<_>>(),
        now_b.iter().map(key).collect::<Vec<_>>()
    );
}

#[test]
fn groups_from_different_rules_do_not_collide() {
    let mut tables = FixtureTables::default();
    tables.multi_rules.push(MultiResourceRule {
        hour: 15,
        duration_hours: 2,
        title: "공동 실험".to_string(),
        resource_ids: vec![1, 4],
    });
    let events = fixtures::generate_from(&tables, day());
    assert_eq!(events.len(), 8);

    let groups: HashSet<&str> = events.iter().filter_map(|e| e.group_id.as_deref()).collect();
    assert_eq!(groups.len(), 2);
    assert!(groups.contains("공동 실험-12"));
    assert!(groups.contains("공동 실험-15"));
}

#[test]
fn rule_with_unknown_target_is_dropped() {
    let tables = FixtureTables {
        resources: vec![Resource::new(1, "Lecture room")],
        single_rules: vec![
            TimeSlotRule {
                hour: 9,
                duration_hours: 1,
                title: "Seminar".to_string(),
                user: "홍길동".to_string(),
                target_resource_id: 1,
            },
            TimeSlotRule {
                hour: 9,
                duration_hours: 1,
                title: "Ghost".to_string(),
                user: "홍길동".to_string(),
                target_resource_id: 99,
            },
        ],
        multi_rules: vec![],
    };
    let events = fixtures::generate_from(&tables, day());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "1\nSeminar");
}

#[test]
fn empty_durations_and_bad_hours_produce_nothing() {
    let tables = FixtureTables {
        resources: fixtures::default_resources(),
        single_rules: vec![TimeSlotRule {
            hour: 24,
            duration_hours: 1,
            title: "Late".to_string(),
            user: "홍길동".to_string(),
            target_resource_id: 1,
        }],
        multi_rules: vec![MultiResourceRule {
            hour: 9,
            duration_hours: 0,
            title: "Empty".to_string(),
            resource_ids: vec![2, 3],
        }],
    };
    assert!(fixtures::generate_from(&tables, day()).is_empty());
}

#[test]
fn reference_day_truncates_to_local_date() {
    let late = Seoul.with_ymd_and_hms(2025, 3, 14, 23, 59, 59).unwrap();
    assert_eq!(fixtures::reference_day(&late), day());
}

#[test]
fn events_serialize_with_camel_case_and_omit_missing_group() {
    let events = fixtures::generate_for(day());
    let single = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(single["resourceId"], 1);
    assert!(single.get("groupId").is_none());

    let grouped = serde_json::to_value(&events[4]).unwrap();
    assert_eq!(grouped["groupId"], "공동 실험-12");
    assert_eq!(grouped["start"], "2025-03-14T12:00:00");
}
