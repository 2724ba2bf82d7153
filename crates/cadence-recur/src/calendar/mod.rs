//! Calendar arithmetic on local calendar days.
//!
//! Everything here works on dates without time of day or timezone. Values
//! that carry a time are normalized to their calendar day first.

pub mod grid;

use cadence_core::constants::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{RecurError, RecurResult};

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// ## Summary
/// Returns the number of days in `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1..=12, which no anchor day can fit.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A value that falls on a single local calendar day.
pub trait CalendarDay {
    /// The calendar day with any time of day stripped.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Strips time of day, leaving the local calendar day.
#[must_use]
pub fn normalize<T: CalendarDay>(value: &T) -> NaiveDate {
    value.calendar_day()
}

/// ## Summary
/// Checks whether `date` lies within `start..=end`, comparing calendar days
/// only.
#[must_use]
pub fn is_date_in_range<D, S, E>(date: &D, start: &S, end: &E) -> bool
where
    D: CalendarDay,
    S: CalendarDay,
    E: CalendarDay,
{
    let day = normalize(date);
    normalize(start) <= day && day <= normalize(end)
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ## Summary
/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// Returns `RecurError::InvalidDate` if the input is not a valid calendar date.
pub fn parse_date(value: &str) -> RecurResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| RecurError::InvalidDate(format!("{value}: {e}")))
}
