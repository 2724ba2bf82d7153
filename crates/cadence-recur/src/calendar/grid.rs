//! Week and month grid helpers for calendar views.
//!
//! Weeks run Sunday through Saturday.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use super::days_in_month;

/// Thursday as days since Sunday.
const THURSDAY: i64 = 4;

/// Returns the Sunday-to-Saturday week containing `date`, or `None` when that
/// week runs past the representable date range.
#[must_use]
pub fn week_dates(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let from_sunday = date.weekday().num_days_from_sunday();
    let sunday = date.checked_sub_days(Days::new(u64::from(from_sunday)))?;
    // the whole week must be representable
    sunday.checked_add_days(Days::new(6))?;

    let mut days = [sunday; 7];
    for (slot, day) in days.iter_mut().zip(sunday.iter_days()) {
        *slot = day;
    }
    Some(days)
}

/// ## Summary
/// Lays out a month as Sunday-first week rows.
///
/// Cells before the 1st and after the last day are `None`. An invalid
/// `month` yields no rows.
#[must_use]
pub fn weeks_at_month(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last_day = days_in_month(year, month);
    let offset = first.weekday().num_days_from_sunday();

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for day in 1..=last_day {
        let index = ((offset + day - 1) % 7) as usize;
        week[index] = Some(day);
        if index == 6 || day == last_day {
            weeks.push(week);
            week = [None; 7];
        }
    }
    weeks
}

/// Week-of-month label for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekLabel {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02} W{}", self.year, self.month, self.week)
    }
}

/// ## Summary
/// Numbers the week containing `date` within its month.
///
/// The week's Thursday decides which month the week belongs to, and week 1 is
/// the week holding that month's first Thursday. A week straddling two months
/// therefore counts towards whichever month has four or more of its days.
///
/// Returns `None` when the week's Thursday is not a representable date.
#[must_use]
pub fn week_label(date: NaiveDate) -> Option<WeekLabel> {
    let from_sunday = i64::from(date.weekday().num_days_from_sunday());
    let thursday = date.checked_add_signed(TimeDelta::days(THURSDAY - from_sunday))?;

    let first_of_month = thursday.with_day(1)?;
    let first_from_sunday = i64::from(first_of_month.weekday().num_days_from_sunday());
    let first_thursday = first_of_month
        .checked_add_signed(TimeDelta::days((THURSDAY - first_from_sunday).rem_euclid(7)))?;

    let weeks_between = (thursday - first_thursday).num_weeks();
    Some(WeekLabel {
        year: thursday.year(),
        month: thursday.month(),
        week: u32::try_from(weeks_between + 1).ok()?,
    })
}

/// Formats the month of `date` as `YYYY-MM`.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
