//! Day and range lookups over an event snapshot.

use cadence_recur::calendar::{CalendarDay, is_date_in_range};
use chrono::NaiveDate;

use crate::model::Event;

impl CalendarDay for Event {
    fn calendar_day(&self) -> NaiveDate {
        self.date
    }
}

/// Events that fall on `day`, in input order.
#[must_use]
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == day).collect()
}

/// ## Summary
/// Events whose date lies within `start..=end`, in input order.
///
/// Bounds may carry a time of day; only the calendar day is compared.
#[must_use]
pub fn events_in_range<'a, S, E>(events: &'a [Event], start: &S, end: &E) -> Vec<&'a Event>
where
    S: CalendarDay,
    E: CalendarDay,
{
    events
        .iter()
        .filter(|event| is_date_in_range(*event, start, end))
        .collect()
}
