//! Modified Leitner scheduling.
//!
//! Bucket `i` is practiced every `2^i` days. A Wrong answer sends the card
//! back to the reset bucket, Hard and Easy move it forward by a fixed step.

use crate::error::{Result, SchedulerError};
use crate::types::{BucketIndex, BucketMap, Day, Difficulty, Flashcard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Leitner bucket movement with configurable steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leitner {
    pub reset_bucket: BucketIndex,
    pub hard_step: usize,
    pub easy_step: usize,
}

impl Default for Leitner {
    fn default() -> Self {
        Self {
            reset_bucket: 0,
            hard_step: 1,
            easy_step: 2,
        }
    }
}

impl Leitner {
    /// Bucket a card moves to from `previous`, or `None` on index overflow.
    pub fn next_bucket(&self, previous: BucketIndex, difficulty: Difficulty) -> Option<BucketIndex> {
        match difficulty {
            Difficulty::Wrong => Some(self.reset_bucket),
            Difficulty::Hard => previous.checked_add(self.hard_step),
            Difficulty::Easy => previous.checked_add(self.easy_step),
        }
    }

    /// Return a new mapping with `card` moved according to `difficulty`.
    ///
    /// The card must already sit in some bucket of `buckets`. Its previous
    /// bucket keeps its (possibly empty) entry, and the target bucket is
    /// created if missing.
    pub fn record_trial(
        &self,
        buckets: &BucketMap,
        card: &Flashcard,
        difficulty: Difficulty,
    ) -> Result<BucketMap> {
        let mut updated = buckets.clone();

        let mut removed = updated
            .iter_mut()
            .filter_map(|(&bucket, cards)| cards.take(card).map(|stored| (bucket, stored)))
            .collect::<Vec<_>>()
            .into_iter();

        let (previous, stored) = removed
            .next()
            .ok_or(SchedulerError::CardNotFound { id: card.id })?;

        let extra = removed.len();
        if extra > 0 {
            tracing::warn!(card = card.id, copies = extra + 1, "card found in several buckets");
        }

        let next = self
            .next_bucket(previous, difficulty)
            .ok_or(SchedulerError::BucketOverflow {
                id: card.id,
                bucket: previous,
            })?;

        tracing::debug!(card = card.id, from = previous, to = next, ?difficulty, "moved card");
        updated.entry(next).or_default().insert(stored);
        Ok(updated)
    }

    /// Place every card in the reset bucket.
    pub fn initial_buckets(&self, cards: impl IntoIterator<Item = Flashcard>) -> BucketMap {
        let cards: BTreeSet<Flashcard> = cards.into_iter().collect();
        if cards.is_empty() {
            return BucketMap::new();
        }
        BucketMap::from([(self.reset_bucket, cards)])
    }
}

/// Cards due on `day`: every card in bucket `i` where `day % 2^i == 0`.
pub fn due_today(buckets: &[BTreeSet<Flashcard>], day: Day) -> BTreeSet<Flashcard> {
    buckets
        .iter()
        .enumerate()
        .filter(|(bucket, _)| is_due(*bucket, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect()
}

fn is_due(bucket: BucketIndex, day: Day) -> bool {
    // Intervals past u64 range only line up with day 0.
    match u32::try_from(bucket).ok().and_then(|b| 1u64.checked_shl(b)) {
        Some(interval) => day % interval == 0,
        None => day == 0,
    }
}
