//! Recurrence date generation.
//!
//! Each step derives a fresh candidate from plain year/month/day integers, so
//! a skipped month or year never shifts the anchor of the steps after it.

use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{days_in_month, format_date};
use crate::error::{RecurError, RecurResult};
use crate::rule::{RepeatRule, RepeatType};

/// ## Summary
/// Returns the earlier of the rule's own end date and the caller's horizon.
///
/// `None` when neither is present.
#[must_use]
pub fn effective_end(rule: &RepeatRule, horizon: Option<NaiveDate>) -> Option<NaiveDate> {
    match (rule.end_date, horizon) {
        (Some(rule_end), Some(horizon)) => Some(rule_end.min(horizon)),
        (rule_end, horizon) => rule_end.or(horizon),
    }
}

/// ## Summary
/// Expands a repeat rule into the ascending list of occurrence dates.
///
/// The first element is always `base`. Later occurrences are emitted up to and
/// including the effective end (see [`effective_end`]). Monthly and yearly
/// rules keep the anchor day of `base`; a month or year without that day
/// contributes no occurrence.
///
/// ## Errors
///
/// Returns an error if:
/// - `rule.interval` is zero
/// - the rule repeats but neither `rule.end_date` nor `horizon` is given
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
#[tracing::instrument(
    level = "debug",
    skip(rule),
    fields(repeat_type = %rule.repeat_type, interval = rule.interval)
)]
pub fn generate(
    base: NaiveDate,
    rule: &RepeatRule,
    horizon: Option<NaiveDate>,
) -> RecurResult<Vec<NaiveDate>> {
    rule.validate()?;

    if !rule.is_repeating() {
        return Ok(vec![base]);
    }

    let end = effective_end(rule, horizon).ok_or(RecurError::Unbounded)?;
    let interval = rule.interval;

    let mut dates = vec![base];
    match rule.repeat_type {
        RepeatType::None => {}
        RepeatType::Daily => dates.extend(by_days(base, u64::from(interval), end)),
        RepeatType::Weekly => dates.extend(by_days(base, u64::from(interval) * 7, end)),
        RepeatType::Monthly => dates.extend(by_months(base, interval, end)),
        RepeatType::Yearly => dates.extend(by_years(base, interval, end)),
    }

    tracing::debug!(%end, count = dates.len(), "Generated repeat dates");
    Ok(dates)
}

/// ## Summary
/// Same as [`generate`], formatted as `YYYY-MM-DD` strings.
///
/// ## Errors
/// See [`generate`].
pub fn generate_repeat_dates(
    base: NaiveDate,
    rule: &RepeatRule,
    horizon: Option<NaiveDate>,
) -> RecurResult<Vec<String>> {
    Ok(generate(base, rule, horizon)?
        .into_iter()
        .map(format_date)
        .collect())
}

fn by_days(base: NaiveDate, step: u64, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let step = Days::new(step);
    std::iter::successors(Some(base), move |current| current.checked_add_days(step))
        .skip(1)
        .take_while(move |candidate| *candidate <= end)
}

/// Months since year 0, so stepping never has to carry into the year by hand.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn first_of_month_index(index: i64) -> Option<NaiveDate> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn by_months(base: NaiveDate, interval: u32, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let anchor_day = base.day();
    let start = month_index(base);
    let step = i64::from(interval);

    (1_i64..)
        .map(move |n| start + n * step)
        .map_while(first_of_month_index)
        .take_while(move |first| *first <= end)
        .filter_map(move |first| on_anchor_day(first, anchor_day))
        .filter(move |candidate| *candidate <= end)
}

fn by_years(base: NaiveDate, interval: u32, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let anchor_month = base.month();
    let anchor_day = base.day();
    let start = i64::from(base.year());
    let step = i64::from(interval);

    (1_i64..)
        .map(move |n| start + n * step)
        .map_while(|year| i32::try_from(year).ok())
        .map_while(move |year| NaiveDate::from_ymd_opt(year, anchor_month, 1))
        .take_while(move |first| *first <= end)
        .filter_map(move |first| on_anchor_day(first, anchor_day))
        .filter(move |candidate| *candidate <= end)
}

/// Moves the first of a month onto the anchor day, or `None` if the month is
/// too short.
fn on_anchor_day(first: NaiveDate, anchor_day: u32) -> Option<NaiveDate> {
    if anchor_day > days_in_month(first.year(), first.month()) {
        tracing::trace!(
            year = first.year(),
            month = first.month(),
            anchor_day,
            "Skipping month without anchor day"
        );
        return None;
    }
    first.with_day(anchor_day)
}
