//! In-memory rank store
//!
//! Committed rows live in a `DashMap` keyed by characteristic. Exclusive
//! access is a per-characteristic lock tracked in a held-set guarded by a
//! `parking_lot::Mutex` and a `Condvar`:
//!
//! - `begin()` waits until the characteristic is free, up to the configured
//!   lock timeout, then marks it held. A timeout surfaces as
//!   `ConcurrentRankConflict`.
//! - Writes are staged on a private copy of the rows.
//! - `commit()` swaps the staged rows in under the map's shard lock, so
//!   readers see either the old list or the new one, never a partial shift.
//! - `Drop` releases the characteristic on every exit path.

use crate::store::{RankStore, RankTransaction};
use dashmap::DashMap;
use parking_lot::{Condvar, Mutex};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use versus_core::{
    CharacteristicDef, CharacteristicId, RankEntry, RankSource, RankingContext, VersusError,
    VersusResult,
};

/// Default wait for a characteristic's rank lock
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Default)]
struct RankRows {
    entries: Vec<RankEntry>,
    /// Number of committed transactions
    version: u64,
}

/// Thread-safe in-memory rank storage
pub struct MemoryRankStore {
    rows: DashMap<CharacteristicId, RankRows>,
    held: Mutex<HashSet<CharacteristicId>>,
    released: Condvar,
    lock_timeout: Duration,
    next_txn_id: AtomicU64,
}

impl MemoryRankStore {
    /// Create an empty store with the default lock timeout
    pub fn new() -> Self {
        Self::with_lock_timeout(DEFAULT_LOCK_TIMEOUT)
    }

    /// Create an empty store that waits at most `lock_timeout` for a
    /// characteristic held by another transaction
    pub fn with_lock_timeout(lock_timeout: Duration) -> Self {
        Self {
            rows: DashMap::new(),
            held: Mutex::new(HashSet::new()),
            released: Condvar::new(),
            lock_timeout,
            next_txn_id: AtomicU64::new(1),
        }
    }

    /// Configured lock timeout
    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Number of committed transactions on a characteristic
    pub fn version(&self, characteristic: CharacteristicId) -> u64 {
        self.rows
            .get(&characteristic)
            .map(|rows| rows.version)
            .unwrap_or(0)
    }

    /// Whether a transaction currently holds the characteristic
    pub fn is_locked(&self, characteristic: CharacteristicId) -> bool {
        self.held.lock().contains(&characteristic)
    }

    fn acquire(&self, characteristic: &CharacteristicDef) -> VersusResult<()> {
        let deadline = Instant::now() + self.lock_timeout;
        let mut held = self.held.lock();
        while held.contains(&characteristic.id) {
            if self.released.wait_until(&mut held, deadline).timed_out()
                && held.contains(&characteristic.id)
            {
                warn!(
                    target: "versus::rank",
                    characteristic = %characteristic.name,
                    timeout_ms = self.lock_timeout.as_millis() as u64,
                    "Rank lock wait timed out"
                );
                return Err(VersusError::ConcurrentRankConflict {
                    characteristic: characteristic.name.clone(),
                    reason: format!(
                        "rank list held by another transaction for longer than {:?}",
                        self.lock_timeout
                    ),
                });
            }
        }
        held.insert(characteristic.id);
        Ok(())
    }

    fn release(&self, characteristic: CharacteristicId) {
        self.held.lock().remove(&characteristic);
        self.released.notify_all();
    }
}

impl Default for MemoryRankStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RankSource for MemoryRankStore {
    fn ranking(&self, characteristic: CharacteristicId) -> VersusResult<RankingContext> {
        let entries = self
            .rows
            .get(&characteristic)
            .map(|rows| rows.entries.clone())
            .unwrap_or_default();
        Ok(RankingContext::new(entries))
    }
}

impl RankStore for MemoryRankStore {
    type Transaction<'a> = MemoryRankTransaction<'a>;

    fn begin(&self, characteristic: &CharacteristicDef) -> VersusResult<MemoryRankTransaction<'_>> {
        self.acquire(characteristic)?;

        let mut staged = self
            .rows
            .get(&characteristic.id)
            .map(|rows| rows.entries.clone())
            .unwrap_or_default();
        staged.sort_by_key(|e| e.rank);

        let txn_id = self.next_txn_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            target: "versus::rank",
            txn_id,
            characteristic = %characteristic.name,
            "Rank transaction started"
        );

        Ok(MemoryRankTransaction {
            store: self,
            txn_id,
            characteristic: characteristic.id,
            name: characteristic.name.clone(),
            staged,
            writes: 0,
            committed: false,
        })
    }
}

/// Exclusive transaction over one characteristic in a [`MemoryRankStore`]
pub struct MemoryRankTransaction<'a> {
    store: &'a MemoryRankStore,
    txn_id: u64,
    characteristic: CharacteristicId,
    name: String,
    staged: Vec<RankEntry>,
    writes: usize,
    committed: bool,
}

impl MemoryRankTransaction<'_> {
    /// Number of staged writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Enforce rank uniqueness against the staged rows
    fn check_rank_free(&self, value: &str, rank: u32) -> VersusResult<()> {
        if rank == 0 {
            return Err(VersusError::internal(format!(
                "rank 0 written for '{}'; ranks start at 1",
                self.name
            )));
        }
        if let Some(holder) = self
            .staged
            .iter()
            .find(|e| e.rank == rank && e.value != value)
        {
            return Err(VersusError::internal(format!(
                "rank {} of '{}' already held by {:?}",
                rank, self.name, holder.value
            )));
        }
        Ok(())
    }
}

impl RankTransaction for MemoryRankTransaction<'_> {
    fn characteristic(&self) -> CharacteristicId {
        self.characteristic
    }

    fn entries(&self) -> &[RankEntry] {
        &self.staged
    }

    fn set_rank(&mut self, value: &str, rank: u32) -> VersusResult<()> {
        self.check_rank_free(value, rank)?;
        let name = &self.name;
        let entry = self
            .staged
            .iter_mut()
            .find(|e| e.value == value)
            .ok_or_else(|| VersusError::ValueNotRanked {
                characteristic: name.clone(),
                value: value.to_string(),
            })?;
        entry.rank = rank;
        self.staged.sort_by_key(|e| e.rank);
        self.writes += 1;
        Ok(())
    }

    fn create(&mut self, value: &str, rank: u32) -> VersusResult<RankEntry> {
        if self.staged.iter().any(|e| e.value == value) {
            return Err(VersusError::DuplicateRankedValue {
                characteristic: self.name.clone(),
                value: value.to_string(),
            });
        }
        self.check_rank_free(value, rank)?;

        let entry = RankEntry::new(self.characteristic, value, rank);
        self.staged.push(entry.clone());
        self.staged.sort_by_key(|e| e.rank);
        self.writes += 1;
        Ok(entry)
    }

    fn commit(mut self) -> VersusResult<()> {
        {
            let mut rows = self.store.rows.entry(self.characteristic).or_default();
            rows.entries = std::mem::take(&mut self.staged);
            rows.version += 1;
        }
        self.committed = true;
        debug!(
            target: "versus::rank",
            txn_id = self.txn_id,
            characteristic = %self.name,
            writes = self.writes,
            "Rank transaction committed"
        );
        Ok(())
    }
}

impl Drop for MemoryRankTransaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            debug!(
                target: "versus::rank",
                txn_id = self.txn_id,
                characteristic = %self.name,
                discarded_writes = self.writes,
                "Rank transaction rolled back"
            );
        }
        self.store.release(self.characteristic);
    }
}
