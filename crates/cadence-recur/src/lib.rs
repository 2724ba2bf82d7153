//! Recurrence date generation for repeating calendar events.
//!
//! Produces the ordered calendar dates a repeat rule yields between an
//! anchor date and an end bound. Months or years lacking the anchor day are
//! skipped rather than clamped, matching RFC 5545 §3.3.10 handling of
//! invalid dates.

pub mod calendar;
pub mod error;
pub mod generator;
pub mod rule;

pub use generator::{effective_end, generate, generate_repeat_dates};
pub use rule::{RepeatRule, RepeatType};
