//! Calendar event records.

use cadence_recur::RepeatRule;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_format;

/// User-authored event template, expanded into one [`Event`] per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    /// Anchor date of the first occurrence.
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Minutes before the start at which to notify.
    #[serde(default)]
    pub notification_time: u32,
    #[serde(default)]
    pub repeat: RepeatRule,
}

/// A concrete occurrence.
///
/// Each occurrence owns its own copy of the repeat rule, so one of them can be
/// detached without touching its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notification_time: u32,
    #[serde(default)]
    pub repeat: RepeatRule,
}

impl Event {
    /// Creates the occurrence of `draft` that falls on `date`.
    #[must_use]
    pub fn from_draft(id: Uuid, date: NaiveDate, draft: &EventDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description.clone(),
            location: draft.location.clone(),
            category: draft.category.clone(),
            notification_time: draft.notification_time,
            repeat: draft.repeat.clone(),
        }
    }

    /// True while the occurrence still belongs to a series.
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.repeat.is_repeating()
    }

    /// Overwrites every field present in `update`.
    pub fn apply(&mut self, update: &EventUpdate) {
        if let Some(title) = &update.title {
            self.title.clone_from(title);
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if let Some(description) = &update.description {
            self.description.clone_from(description);
        }
        if let Some(location) = &update.location {
            self.location.clone_from(location);
        }
        if let Some(category) = &update.category {
            self.category.clone_from(category);
        }
        if let Some(notification_time) = update.notification_time {
            self.notification_time = notification_time;
        }
    }

    /// Applies `update` and severs the occurrence from its series.
    pub fn detach(&mut self, update: &EventUpdate) {
        self.apply(update);
        self.repeat = self.repeat.detached();
    }
}

/// Field overrides for a single occurrence. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_format::option"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_format::option"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<u32>,
}

/// An event with its derived series flag, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub is_repeat_event: bool,
}

impl From<Event> for MarkedEvent {
    fn from(event: Event) -> Self {
        let is_repeat_event = event.is_repeating();
        Self {
            event,
            is_repeat_event,
        }
    }
}
