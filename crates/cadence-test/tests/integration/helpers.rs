//! Test helpers shared by the integration tests.

use cadence_test::component::model::EventDraft;
use cadence_test::component::rule::{RepeatRule, RepeatType};
use chrono::{NaiveDate, NaiveTime};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

/// A draft anchored at `anchor` repeating by `rule`.
pub fn draft(title: &str, anchor: NaiveDate, rule: RepeatRule) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        date: anchor,
        start_time: time(10, 0),
        end_time: time(11, 0),
        description: format!("{title} description"),
        location: "Main office".to_string(),
        category: "Work".to_string(),
        notification_time: 10,
        repeat: rule,
    }
}

/// A draft repeating `repeat_type` every `interval` units until `end`.
pub fn repeating_draft(
    title: &str,
    anchor: NaiveDate,
    repeat_type: RepeatType,
    interval: u32,
    end: NaiveDate,
) -> EventDraft {
    draft(
        title,
        anchor,
        RepeatRule::new(repeat_type, interval).with_end_date(end),
    )
}
