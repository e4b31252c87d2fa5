//! Conversion between sparse and dense bucket representations.

use crate::error::{Result, SchedulerError};
use crate::types::{BucketIndex, BucketMap, BucketRange, BucketSets, Flashcard};
use std::collections::BTreeSet;

/// Convert a sparse bucket mapping into a dense array.
///
/// The array covers every index from 0 to the highest key, with empty sets
/// for buckets missing from the mapping. An empty mapping yields an empty array.
/// Fails with `BucketOutOfRange` if the highest key cannot be allocated densely.
pub fn to_bucket_sets(buckets: &BucketMap) -> Result<BucketSets> {
    let Some((&max_bucket, _)) = buckets.last_key_value() else {
        return Ok(Vec::new());
    };

    let mut sets = dense_vec(max_bucket, BTreeSet::new())?;
    for (&bucket, cards) in buckets {
        sets[bucket] = cards.clone();
    }
    Ok(sets)
}

/// Vector of `max_bucket + 1` copies of `fill`.
pub(crate) fn dense_vec<T: Clone>(max_bucket: BucketIndex, fill: T) -> Result<Vec<T>> {
    let out_of_range = SchedulerError::BucketOutOfRange { bucket: max_bucket };
    let len = max_bucket
        .checked_add(1)
        .ok_or_else(|| out_of_range.clone())?;

    let mut dense = Vec::new();
    dense.try_reserve_exact(len).map_err(|_| out_of_range)?;
    dense.resize(len, fill);
    Ok(dense)
}

/// Lowest and highest non-empty bucket, or `None` if every bucket is empty.
pub fn bucket_range(buckets: &[BTreeSet<Flashcard>]) -> Option<BucketRange> {
    let mut occupied = buckets
        .iter()
        .enumerate()
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(idx, _)| idx);

    let min_bucket = occupied.next()?;
    let max_bucket = occupied.last().unwrap_or(min_bucket);
    Some(BucketRange {
        min_bucket,
        max_bucket,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(id: i64) -> Flashcard {
        Flashcard::new(id, format!("Q{id}"), format!("A{id}"))
    }

    fn set(cards: &[Flashcard]) -> BTreeSet<Flashcard> {
        cards.iter().cloned().collect()
    }

    #[test]
    fn empty_map_gives_empty_array() {
        assert!(to_bucket_sets(&BucketMap::new()).unwrap().is_empty());
    }

    #[test]
    fn gaps_become_empty_sets() {
        let (a, b) = (card(1), card(2));
        let map = BucketMap::from([(0, set(&[a.clone()])), (2, set(&[b.clone()]))]);
        let sets = to_bucket_sets(&map).unwrap();
        assert_eq!(sets, vec![set(&[a]), BTreeSet::new(), set(&[b])]);
    }

    #[test]
    fn trailing_empty_entry_still_sizes_array() {
        let map = BucketMap::from([(0, set(&[card(1)])), (3, BTreeSet::new())]);
        assert_eq!(to_bucket_sets(&map).unwrap().len(), 4);
    }

    #[test]
    fn unrepresentable_bucket_is_rejected() {
        for bucket in [usize::MAX, usize::MAX / 2] {
            let map = BucketMap::from([(0, set(&[card(1)])), (bucket, set(&[card(2)]))]);
            assert_eq!(
                to_bucket_sets(&map),
                Err(SchedulerError::BucketOutOfRange { bucket })
            );
        }
    }

    #[test]
    fn range_of_empty_array_is_none() {
        assert_eq!(bucket_range(&[]), None);
        assert_eq!(bucket_range(&[BTreeSet::new(), BTreeSet::new()]), None);
    }

    #[test]
    fn range_of_single_bucket() {
        let sets = vec![BTreeSet::new(), set(&[card(1)]), BTreeSet::new()];
        assert_eq!(
            bucket_range(&sets),
            Some(BucketRange {
                min_bucket: 1,
                max_bucket: 1
            })
        );
    }

    #[test]
    fn range_spans_non_consecutive_buckets() {
        let sets = vec![
            set(&[card(1)]),
            BTreeSet::new(),
            set(&[card(2)]),
            BTreeSet::new(),
            set(&[card(3)]),
        ];
        assert_eq!(
            bucket_range(&sets),
            Some(BucketRange {
                min_bucket: 0,
                max_bucket: 4
            })
        );
    }

    #[test]
    fn range_matches_sparse_keys() {
        let map = BucketMap::from([
            (1, BTreeSet::new()),
            (3, set(&[card(1)])),
            (6, set(&[card(2)])),
            (9, BTreeSet::new()),
        ]);
        assert_eq!(
            bucket_range(&to_bucket_sets(&map).unwrap()),
            Some(BucketRange {
                min_bucket: 3,
                max_bucket: 6
            })
        );
    }
}
