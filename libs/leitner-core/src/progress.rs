//! Learning progress statistics.

use crate::algorithm::buckets::dense_vec;
use crate::error::Result;
use crate::types::{BucketMap, Difficulty, PracticeRecord, ProgressStats};

/// Summarize the current buckets and the practice log.
///
/// `bucket_counts` is indexed by bucket number. Indices with no entry in
/// `buckets` stay `None`; an entry holding no cards counts as `Some(0)`.
pub fn progress_stats(buckets: &BucketMap, history: &[PracticeRecord]) -> Result<ProgressStats> {
    let mut total_cards = 0;
    let mut bucket_counts = match buckets.last_key_value() {
        Some((&max_bucket, _)) => dense_vec(max_bucket, None)?,
        None => Vec::new(),
    };

    for (&bucket, cards) in buckets {
        bucket_counts[bucket] = Some(cards.len());
        total_cards += cards.len();
    }

    let total_sessions = history.len();
    let (correct_percentage, average_difficulty) = if total_sessions == 0 {
        (0.0, 0.0)
    } else {
        let easy = history
            .iter()
            .filter(|record| record.difficulty == Difficulty::Easy)
            .count();
        let difficulty_sum: u64 = history
            .iter()
            .map(|record| u64::from(record.difficulty.to_value()))
            .sum();
        (
            easy as f64 / total_sessions as f64,
            difficulty_sum as f64 / total_sessions as f64,
        )
    };

    Ok(ProgressStats {
        total_cards,
        bucket_counts,
        total_sessions,
        correct_percentage,
        average_difficulty,
    })
}
