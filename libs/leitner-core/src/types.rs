//! Core types for bucket scheduling.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

/// Stable card identifier.
pub type CardId = i64;

/// Bucket number; bucket 0 is practiced every day.
pub type BucketIndex = usize;

/// Day number counted from the first study day (day 0).
pub type Day = u64;

/// A flashcard.
///
/// Equality, hashing and ordering use `id` only, so two cards with the same
/// text are still distinct bucket members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: CardId,
    pub front: String,
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Flashcard {
    /// Create a card with no hint and no tags.
    pub fn new(id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            hint: None,
            tags: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Flashcard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flashcard {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// How well the learner recalled a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Wrong,
    Hard,
    Easy,
}

impl Difficulty {
    /// Convert to ordinal value (0-2).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Wrong => 0,
            Self::Hard => 1,
            Self::Easy => 2,
        }
    }

    /// Create from ordinal value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Wrong),
            1 => Some(Self::Hard),
            2 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// One entry of the practice log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub card: Flashcard,
    pub day: Day,
    pub difficulty: Difficulty,
}

impl PracticeRecord {
    pub fn new(card: Flashcard, day: Day, difficulty: Difficulty) -> Self {
        Self {
            card,
            day,
            difficulty,
        }
    }
}

/// Sparse bucket mapping: bucket number to the cards it holds.
pub type BucketMap = BTreeMap<BucketIndex, BTreeSet<Flashcard>>;

/// Dense bucket array: index is the bucket number, gaps are empty sets.
pub type BucketSets = Vec<BTreeSet<Flashcard>>;

/// Lowest and highest occupied bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRange {
    pub min_bucket: BucketIndex,
    pub max_bucket: BucketIndex,
}

/// Summary of learning progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_cards: usize,
    /// Card count per bucket. `None` means the bucket has no entry in the
    /// mapping, while `Some(0)` is an entry holding no cards.
    pub bucket_counts: Vec<Option<usize>>,
    pub total_sessions: usize,
    /// Fraction of sessions rated Easy (0.0 to 1.0).
    pub correct_percentage: f64,
    pub average_difficulty: f64,
}
