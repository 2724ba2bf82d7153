//! Repeat rule value type.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};

/// Repeat frequency of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parses a repeat type from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => return None,
        })
    }

    /// True for every type that yields more than the anchor occurrence.
    #[must_use]
    pub const fn is_repeating(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for RepeatType {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecurError::UnknownRepeatType(s.to_string()))
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_interval() -> u32 {
    1
}

/// Repeat rule attached to a draft and to every occurrence created from it.
///
/// `interval` counts units of `repeat_type` between occurrences. A rule of
/// type [`RepeatType::None`] yields exactly one occurrence whatever its
/// `end_date` says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for RepeatRule {
    fn default() -> Self {
        Self::none()
    }
}

impl RepeatRule {
    /// Creates an open-ended rule.
    #[must_use]
    pub const fn new(repeat_type: RepeatType, interval: u32) -> Self {
        Self {
            repeat_type,
            interval,
            end_date: None,
        }
    }

    /// A rule that never repeats.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(RepeatType::None, 1)
    }

    /// Sets the inclusive end date.
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.repeat_type.is_repeating()
    }

    /// Returns a copy downgraded to [`RepeatType::None`], keeping interval and
    /// end date as they were.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            repeat_type: RepeatType::None,
            ..self.clone()
        }
    }

    /// ## Summary
    /// Checks the rule invariants.
    ///
    /// ## Errors
    /// Returns `RecurError::InvalidInterval` if `interval` is zero.
    pub fn validate(&self) -> RecurResult<()> {
        if self.interval == 0 {
            return Err(RecurError::InvalidInterval(self.interval));
        }
        Ok(())
    }
}
