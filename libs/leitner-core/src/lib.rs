//! Leitner-style spaced repetition scheduling over flashcard buckets.
//!
//! Provides:
//! - Sparse/dense bucket conversion and occupied range inspection
//! - Due card selection using doubling bucket intervals
//! - Bucket reassignment after a practice trial
//! - Answer hints and progress statistics
//! - Study day calculation and a markdown deck parser

pub mod algorithm;
pub mod calendar;
pub mod error;
pub mod hint;
pub mod parser;
pub mod progress;
pub mod types;

pub use algorithm::{
    bucket_range, due_today, initial_buckets, record_trial, to_bucket_sets, Leitner,
};
pub use calendar::study_day;
pub use error::{ParseError, Result, SchedulerError};
pub use hint::hint_for;
pub use parser::parse;
pub use progress::progress_stats;
pub use types::{
    BucketIndex, BucketMap, BucketRange, BucketSets, CardId, Day, Difficulty, Flashcard,
    PracticeRecord, ProgressStats,
};
