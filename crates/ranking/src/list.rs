//! RankedValueList: dense, unique rank ordering of string values
//!
//! ## Operations
//!
//! - `append_at_end`: rank 1 on an empty list, otherwise max + 1
//! - `insert_at`: shift every entry with rank >= target up by one, highest
//!   rank first, then create the new entry at the target rank
//! - `add`: String characteristics only; appends when no rank is given
//!
//! Each operation runs inside one exclusive [`RankTransaction`]: the read,
//! the shift and the insert are published together or not at all.
//!
//! ## Rules
//!
//! - A value already in the list is rejected with `DuplicateRankedValue`.
//! - `insert_at` accepts ranks `1..=max + 1`; anything else is `InvalidRank`,
//!   so ranks stay dense.
//! - No retry happens here. `ConcurrentRankConflict` goes to the caller.

use crate::store::{RankStore, RankTransaction};
use std::sync::Arc;
use tracing::debug;
use versus_core::{
    max_rank, CharacteristicDef, CharacteristicKind, RankEntry, RankSource, VersusError,
    VersusResult,
};

/// Stateless facade over a [`RankStore`]
///
/// Holds only an `Arc` to the store, so clones are cheap and any number of
/// lists may share one store.
pub struct RankedValueList<S> {
    store: Arc<S>,
}

impl<S> Clone for RankedValueList<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RankStore> RankedValueList<S> {
    /// Create a list facade over a store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Rank a new string value, at the end or at a given rank
    ///
    /// # Errors
    ///
    /// - `WrongKind` if the characteristic is not a String characteristic
    /// - `DuplicateRankedValue` if the value is already ranked
    /// - `InvalidRank` if `rank` is outside `1..=max + 1`
    /// - `ConcurrentRankConflict` if the rank list could not be acquired
    pub fn add(
        &self,
        characteristic: &CharacteristicDef,
        value: &str,
        rank: Option<u32>,
    ) -> VersusResult<RankEntry> {
        ensure_string_kind(characteristic)?;
        match rank {
            None => self.append_at_end(characteristic, value),
            Some(rank) => self.insert_at(characteristic, value, rank),
        }
    }

    /// Rank a new value after every existing one
    ///
    /// # Errors
    ///
    /// See [`RankedValueList::add`].
    pub fn append_at_end(
        &self,
        characteristic: &CharacteristicDef,
        value: &str,
    ) -> VersusResult<RankEntry> {
        ensure_string_kind(characteristic)?;
        let mut txn = self.store.begin(characteristic)?;
        ensure_unranked(&txn, characteristic, value)?;

        let rank = max_rank(txn.entries()) + 1;
        let entry = txn.create(value, rank)?;
        txn.commit()?;

        debug!(
            target: "versus::rank",
            characteristic = %characteristic.name,
            value,
            rank,
            "Value appended"
        );
        Ok(entry)
    }

    /// Rank a new value at `rank`, shifting every entry at or below it
    ///
    /// # Errors
    ///
    /// See [`RankedValueList::add`].
    pub fn insert_at(
        &self,
        characteristic: &CharacteristicDef,
        value: &str,
        rank: u32,
    ) -> VersusResult<RankEntry> {
        ensure_string_kind(characteristic)?;
        let mut txn = self.store.begin(characteristic)?;
        ensure_unranked(&txn, characteristic, value)?;

        let max = max_rank(txn.entries()) + 1;
        if rank == 0 || rank > max {
            return Err(VersusError::InvalidRank {
                characteristic: characteristic.name.clone(),
                rank,
                max,
            });
        }

        // Highest rank first so no two entries ever share a rank
        let mut shifted: Vec<(String, u32)> = txn
            .entries()
            .iter()
            .filter(|e| e.rank >= rank)
            .map(|e| (e.value.clone(), e.rank))
            .collect();
        shifted.sort_by(|a, b| b.1.cmp(&a.1));
        for (shifted_value, old_rank) in &shifted {
            txn.set_rank(shifted_value, old_rank + 1)?;
        }

        let entry = txn.create(value, rank)?;
        txn.commit()?;

        debug!(
            target: "versus::rank",
            characteristic = %characteristic.name,
            value,
            rank,
            shifted = shifted.len(),
            "Value inserted"
        );
        Ok(entry)
    }

    /// Committed entries of a characteristic, ascending by rank
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub fn entries(&self, characteristic: &CharacteristicDef) -> VersusResult<Vec<RankEntry>> {
        Ok(self.store.ranking(characteristic.id)?.entries().to_vec())
    }

    /// Committed rank of a value, if ranked
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub fn rank_of(
        &self,
        characteristic: &CharacteristicDef,
        value: &str,
    ) -> VersusResult<Option<u32>> {
        Ok(self.store.ranking(characteristic.id)?.rank_of(value))
    }
}

fn ensure_string_kind(characteristic: &CharacteristicDef) -> VersusResult<()> {
    if characteristic.kind != CharacteristicKind::String {
        return Err(VersusError::WrongKind {
            characteristic: characteristic.name.clone(),
            expected: CharacteristicKind::String,
            actual: characteristic.kind,
        });
    }
    Ok(())
}

fn ensure_unranked<T: RankTransaction>(
    txn: &T,
    characteristic: &CharacteristicDef,
    value: &str,
) -> VersusResult<()> {
    if txn.entries().iter().any(|e| e.value == value) {
        return Err(VersusError::DuplicateRankedValue {
            characteristic: characteristic.name.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}
