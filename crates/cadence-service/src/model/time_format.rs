//! Serde adapters for `HH:MM` times of day.
//!
//! Seconds are accepted on input and dropped on output.

use cadence_core::constants::TIME_FORMAT;
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const TIME_FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

fn parse<E: serde::de::Error>(value: &str) -> Result<NaiveTime, E> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMAT_WITH_SECONDS))
        .map_err(|e| E::custom(format!("invalid time of day {value:?}: {e}")))
}

/// ## Summary
/// Serializes a time as `HH:MM`.
///
/// ## Errors
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

/// ## Summary
/// Deserializes `HH:MM` or `HH:MM:SS`.
///
/// ## Errors
/// Returns an error for any other shape.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw)
}

/// Same as the parent module for optional fields.
pub mod option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// ## Summary
    /// Serializes `Some` as `HH:MM` and `None` as null.
    ///
    /// ## Errors
    /// Propagates serializer errors.
    #[expect(
        clippy::ref_option,
        reason = "serde `with` passes the field by reference"
    )]
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => super::serialize(time, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// ## Summary
    /// Deserializes an optional `HH:MM` or `HH:MM:SS`.
    ///
    /// ## Errors
    /// Returns an error for a present value of any other shape.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw))
            .transpose()
    }
}
