//! Test fixtures and factory functions for creating test data.

#![allow(dead_code)]

use std::collections::BTreeSet;

use leitner_core::{BucketIndex, BucketMap, Flashcard};

/// Card with generated front/back text.
pub fn card(id: i64) -> Flashcard {
    Flashcard::new(id, format!("Question {id}?"), format!("Answer{id}"))
}

/// Set of generated cards.
pub fn cards(ids: &[i64]) -> BTreeSet<Flashcard> {
    ids.iter().map(|&id| card(id)).collect()
}

/// Build a sparse mapping from `(bucket, card ids)` pairs.
pub fn bucket_map(entries: &[(BucketIndex, &[i64])]) -> BucketMap {
    entries
        .iter()
        .map(|&(bucket, ids)| (bucket, cards(ids)))
        .collect()
}

/// Bucket currently holding `card`, if any.
pub fn bucket_of(buckets: &BucketMap, card: &Flashcard) -> Option<BucketIndex> {
    buckets
        .iter()
        .find(|(_, set)| set.contains(card))
        .map(|(&bucket, _)| bucket)
}

/// Sample deck in the markdown card format.
pub fn sample_deck() -> &'static str {
    "ID: 1\n\
     Q: Striped African animal?\n\
     A: Zebra\n\
     H: animal\n\
     T: animals\n\
     \n\
     ID: 2\n\
     Q: Capital of France?\n\
     A: Paris\n\
     H: city\n\
     T: geography, europe\n\
     \n\
     Q: Largest planet?\n\
     A: Jupiter\n"
}
