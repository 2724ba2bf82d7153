//! Repeat instance manager.
//!
//! Expands drafts into per-occurrence events and edits single occurrences.
//! Collection operations take a snapshot and hand back a new one; callers
//! treat the result as the new source of truth.

use cadence_core::config::Settings;
use cadence_core::error::CoreError;
use cadence_recur::{RepeatRule, generate};
use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::model::{Event, EventDraft, EventUpdate, MarkedEvent};

/// ## Summary
/// Expands a draft into one event per occurrence.
///
/// The rule's own end date bounds the series; `horizon` is only used when the
/// rule has none. Every event gets a fresh id and its own copy of the rule.
///
/// ## Errors
///
/// Returns an error if the rule is invalid, or if it repeats with neither an
/// end date nor a horizon.
#[tracing::instrument(skip(draft), fields(title = %draft.title, date = %draft.date))]
pub fn create_repeat_events(
    draft: &EventDraft,
    horizon: Option<NaiveDate>,
) -> ServiceResult<Vec<Event>> {
    let bound = draft.repeat.end_date.or(horizon);
    let dates = generate(draft.date, &draft.repeat, bound)?;

    let events: Vec<Event> = dates
        .into_iter()
        .map(|date| Event::from_draft(Uuid::now_v7(), date, draft))
        .collect();

    tracing::debug!(count = events.len(), "Created repeat events");
    Ok(events)
}

/// ## Summary
/// Edits one occurrence and detaches it from its series.
///
/// The matching event receives every field in `update` and its repeat type
/// becomes `none`. All other events pass through untouched. An unknown `id`
/// returns the input as-is.
#[tracing::instrument(skip(events, update), fields(count = events.len()))]
#[must_use]
pub fn update_single_repeat_event(
    mut events: Vec<Event>,
    id: Uuid,
    update: &EventUpdate,
) -> Vec<Event> {
    match events.iter_mut().find(|event| event.id == id) {
        Some(event) => {
            event.detach(update);
            tracing::debug!("Detached event from its series");
        }
        None => tracing::warn!("No event with this id, nothing updated"),
    }
    events
}

/// ## Summary
/// Removes one occurrence, leaving its siblings and their rules alone.
///
/// An unknown `id` returns the input as-is.
#[tracing::instrument(skip(events), fields(count = events.len()))]
#[must_use]
pub fn delete_single_repeat_event(mut events: Vec<Event>, id: Uuid) -> Vec<Event> {
    let before = events.len();
    events.retain(|event| event.id != id);

    if events.len() == before {
        tracing::warn!("No event with this id, nothing deleted");
    } else {
        tracing::debug!("Deleted single event");
    }
    events
}

/// ## Summary
/// Flags each event that still belongs to a series.
///
/// The flag is derived from `repeat.type` on every call and never stored.
#[must_use]
pub fn mark_repeat_events(events: &[Event]) -> Vec<MarkedEvent> {
    events.iter().cloned().map(MarkedEvent::from).collect()
}

/// Repeat operations bound to a default horizon for open-ended rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatEventManager {
    default_horizon_days: u32,
}

impl RepeatEventManager {
    /// ## Summary
    /// Creates a manager whose open-ended rules stop `default_horizon_days`
    /// after their anchor date.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero horizon.
    pub fn new(default_horizon_days: u32) -> ServiceResult<Self> {
        if default_horizon_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "default horizon must be at least one day".to_string(),
            )
            .into());
        }
        Ok(Self {
            default_horizon_days,
        })
    }

    /// ## Summary
    /// Creates a manager from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the settings fail validation.
    pub fn from_settings(settings: &Settings) -> ServiceResult<Self> {
        settings.validate()?;
        Self::new(settings.recurrence.default_horizon_days)
    }

    #[must_use]
    pub const fn default_horizon_days(&self) -> u32 {
        self.default_horizon_days
    }

    /// Last day covered by the default horizon of a series anchored at `anchor`.
    #[must_use]
    pub fn default_horizon(&self, anchor: NaiveDate) -> Option<NaiveDate> {
        anchor.checked_add_days(Days::new(u64::from(self.default_horizon_days)))
    }

    /// ## Summary
    /// Occurrence dates of `rule` from `base`, bounded by `until` when given
    /// and by the default horizon otherwise.
    ///
    /// ## Errors
    /// Returns an error if the rule is invalid.
    pub fn repeat_dates(
        &self,
        base: NaiveDate,
        rule: &RepeatRule,
        until: Option<NaiveDate>,
    ) -> ServiceResult<Vec<NaiveDate>> {
        let horizon = until.or_else(|| self.default_horizon(base));
        Ok(generate(base, rule, horizon)?)
    }

    /// ## Summary
    /// [`create_repeat_events`] with the default horizon filled in.
    ///
    /// ## Errors
    /// Returns an error if the draft's rule is invalid.
    pub fn create(&self, draft: &EventDraft) -> ServiceResult<Vec<Event>> {
        self.create_until(draft, None)
    }

    /// ## Summary
    /// [`create_repeat_events`] bounded by `until` when given and by the
    /// default horizon otherwise. A rule's own end date still wins.
    ///
    /// ## Errors
    /// Returns an error if the draft's rule is invalid.
    pub fn create_until(
        &self,
        draft: &EventDraft,
        until: Option<NaiveDate>,
    ) -> ServiceResult<Vec<Event>> {
        let horizon = until.or_else(|| self.default_horizon(draft.date));
        create_repeat_events(draft, horizon)
    }
}

impl Default for RepeatEventManager {
    fn default() -> Self {
        Self {
            default_horizon_days: cadence_core::constants::DEFAULT_HORIZON_DAYS,
        }
    }
}
