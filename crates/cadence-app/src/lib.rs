//! Command-line front end for cadence.

pub mod cli;
