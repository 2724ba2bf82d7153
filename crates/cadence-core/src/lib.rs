//! Shared building blocks for the cadence workspace: configuration, errors
//! and wire-format constants.

pub mod config;
pub mod constants;
pub mod error;
