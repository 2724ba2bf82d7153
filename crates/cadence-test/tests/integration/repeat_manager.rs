//! Repeat instance lifecycle: create, detach, delete, mark.

use std::collections::HashSet;

use cadence_test::component::model::EventUpdate;
use cadence_test::component::repeat::{
    RepeatEventManager, create_repeat_events, delete_single_repeat_event, mark_repeat_events,
    update_single_repeat_event,
};
use cadence_test::component::rule::{RepeatRule, RepeatType};
use cadence_test::component::view::events_for_day;

use super::helpers::{date, draft, repeating_draft, time};

#[test_log::test]
fn expand_creates_one_event_per_occurrence() {
    let draft = repeating_draft(
        "Rent",
        date(2024, 1, 31),
        RepeatType::Monthly,
        1,
        date(2024, 12, 31),
    );

    let events = create_repeat_events(&draft, None).unwrap();

    // Jan, Mar, May, Jul, Aug, Oct, Dec
    assert_eq!(events.len(), 7);
    let ids: HashSet<_> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids.len(), 7);
    assert!(events.iter().all(|event| event.title == "Rent"
        && event.location == draft.location
        && event.repeat == draft.repeat));
}

#[test]
fn expand_of_single_event() {
    let draft = draft("Dentist", date(2024, 5, 2), RepeatRule::none());

    let events = create_repeat_events(&draft, None).unwrap();

    assert_eq!(events.len(), 1);
    assert!(!mark_repeat_events(&events)[0].is_repeat_event);
}

#[test]
fn detach_then_mark_changes_only_target() {
    let draft = repeating_draft(
        "Standup",
        date(2024, 1, 1),
        RepeatType::Daily,
        1,
        date(2024, 1, 5),
    );
    let events = create_repeat_events(&draft, None).unwrap();
    let target = events[2].id;

    let events = update_single_repeat_event(
        events,
        target,
        &EventUpdate {
            start_time: Some(time(9, 30)),
            ..EventUpdate::default()
        },
    );
    let marked = mark_repeat_events(&events);

    assert_eq!(marked.len(), 5);
    for item in &marked {
        assert_eq!(item.is_repeat_event, item.event.id != target);
        if item.event.id == target {
            assert_eq!(item.event.start_time, time(9, 30));
            assert_eq!(item.event.end_time, time(11, 0));
            assert_eq!(item.event.title, "Standup");
        } else {
            assert_eq!(item.event.start_time, time(10, 0));
        }
    }
}

#[test]
fn delete_removes_exactly_one() {
    let draft = repeating_draft(
        "Reading",
        date(2024, 1, 1),
        RepeatType::Daily,
        1,
        date(2024, 1, 3),
    );
    let events = create_repeat_events(&draft, None).unwrap();
    let target = events[1].id;

    let remaining = delete_single_repeat_event(events.clone(), target);

    assert_eq!(remaining.len(), events.len() - 1);
    assert!(events_for_day(&remaining, date(2024, 1, 2)).is_empty());
    assert!(
        remaining
            .iter()
            .all(|event| event.repeat.repeat_type == RepeatType::Daily)
    );
}

#[test]
fn delete_works_on_detached_events() {
    let draft = repeating_draft(
        "Review",
        date(2024, 3, 4),
        RepeatType::Weekly,
        2,
        date(2024, 4, 29),
    );
    let events = create_repeat_events(&draft, None).unwrap();
    let target = events[0].id;

    let events = update_single_repeat_event(events, target, &EventUpdate::default());
    let events = delete_single_repeat_event(events, target);

    assert_eq!(events.len(), 4);
    assert!(mark_repeat_events(&events).iter().all(|item| item.is_repeat_event));
}

#[test]
fn manager_uses_default_horizon_for_open_rules() {
    let manager = RepeatEventManager::new(30).unwrap();
    let draft = draft(
        "Water plants",
        date(2024, 2, 1),
        RepeatRule::new(RepeatType::Weekly, 1),
    );

    let events = manager.create(&draft).unwrap();

    // 2024-02-01 + 30 days = 2024-03-02
    let last = events.last().map(|event| event.date);
    assert_eq!(events.len(), 5);
    assert_eq!(last, Some(date(2024, 2, 29)));
}
