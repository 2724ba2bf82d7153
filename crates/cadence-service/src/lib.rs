//! Event model and the repeat instance manager.
//!
//! Series membership is never stored: occurrences created together from one
//! draft form a series only through their shared repeat rule, and a detached
//! occurrence is recognised purely by `repeat.type == none`.

pub mod error;
pub mod model;
pub mod repeat;
pub mod view;
