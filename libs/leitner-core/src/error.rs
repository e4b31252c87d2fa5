//! Error types for leitner-core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{BucketIndex, CardId};

/// Result type alias, defaulting to SchedulerError.
pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;

/// Contract violations raised by the scheduling functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("card {id} is not in any bucket")]
    CardNotFound { id: CardId },

    #[error("card {id} cannot move past bucket {bucket}")]
    BucketOverflow { id: CardId, bucket: BucketIndex },

    #[error("bucket {bucket} is too large to index densely")]
    BucketOutOfRange { bucket: BucketIndex },

    #[error("card {id} has a blank answer")]
    BlankAnswer { id: CardId },

    #[error("card {id} has an answer spanning multiple lines")]
    MultilineAnswer { id: CardId },

    #[error("study day {date} is before schedule start {start}")]
    DayBeforeStart { date: NaiveDate, start: NaiveDate },

    #[error("invalid daily reset hour {0}, expected 0-23")]
    InvalidResetHour(u32),
}

/// Errors that can occur during deck parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing front at line {line}")]
    MissingFront { line: usize },

    #[error("missing back at line {line}")]
    MissingBack { line: usize },

    #[error("invalid ID format at line {line}: {value}")]
    InvalidId { line: usize, value: String },

    #[error("duplicate ID {id} at line {line}")]
    DuplicateId { id: CardId, line: usize },

    #[error("no ID left to assign to card at line {line}")]
    IdOverflow { line: usize },
}
