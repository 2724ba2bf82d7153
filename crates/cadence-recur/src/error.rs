use thiserror::Error;

/// Recurrence rule and calendar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurError {
    #[error("Invalid repeat interval {0}: must be at least 1")]
    InvalidInterval(u32),

    #[error("Unbounded repeat rule: no end date and no horizon supplied")]
    Unbounded,

    #[error("Unknown repeat type: {0}")]
    UnknownRepeatType(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
