//! Rank entries for string characteristic values
//!
//! Strings have no intrinsic order, so each rated characteristic carries a
//! list of `{value, rank}` pairs. Lower rank is better. Within one
//! characteristic ranks are unique.

use crate::types::CharacteristicId;
use serde::{Deserialize, Serialize};

/// One ranked value of a characteristic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankEntry {
    /// Characteristic the rank belongs to
    pub characteristic: CharacteristicId,
    /// Raw value being ranked
    pub value: String,
    /// Position, starting at 1
    pub rank: u32,
}

impl RankEntry {
    /// Create an entry
    pub fn new(characteristic: CharacteristicId, value: impl Into<String>, rank: u32) -> Self {
        Self {
            characteristic,
            value: value.into(),
            rank,
        }
    }
}

/// Highest rank among `entries`, 0 when empty; order does not matter
pub fn max_rank(entries: &[RankEntry]) -> u32 {
    entries.iter().map(|e| e.rank).max().unwrap_or(0)
}

/// Read-only ordered rank list handed to the rating comparator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingContext {
    entries: Vec<RankEntry>,
}

impl RankingContext {
    /// Build a context; entries are sorted by ascending rank
    pub fn new(mut entries: Vec<RankEntry>) -> Self {
        entries.sort_by_key(|e| e.rank);
        Self { entries }
    }

    /// Build from `(value, rank)` pairs
    pub fn from_pairs<'a, I>(characteristic: CharacteristicId, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(value, rank)| RankEntry::new(characteristic, value, rank))
                .collect(),
        )
    }

    /// Rank of a raw value, if ranked
    pub fn rank_of(&self, value: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.rank)
    }

    /// Entries in ascending rank order
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Number of ranked values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is ranked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
