//! Leitner scheduling over flashcard buckets.

pub mod buckets;
pub mod leitner;

pub use buckets::{bucket_range, to_bucket_sets};
pub use leitner::{due_today, Leitner};

use crate::error::Result;
use crate::types::{BucketMap, Difficulty, Flashcard};

/// Move `card` to its next bucket using the default Leitner steps.
pub fn record_trial(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: Difficulty,
) -> Result<BucketMap> {
    Leitner::default().record_trial(buckets, card, difficulty)
}

/// Bucket mapping for a new deck, with every card in bucket 0.
pub fn initial_buckets(cards: impl IntoIterator<Item = Flashcard>) -> BucketMap {
    Leitner::default().initial_buckets(cards)
}
