//! Transactional rank storage
//!
//! A rank list is mutated only inside a [`RankTransaction`] scoped to one
//! characteristic. The scope is exclusive: while a transaction is open no
//! other transaction on the same characteristic can begin.
//!
//! ## Lifecycle
//!
//! ```text
//! begin()  -> acquire the characteristic's rank rows exclusively
//! set_rank / create -> staged, invisible to readers
//! commit() -> publish every staged write at once
//! drop     -> release; uncommitted writes are discarded
//! ```
//!
//! Dropping a transaction without committing is a rollback, so every early
//! return through `?` leaves the committed ranks untouched.

use versus_core::{CharacteristicDef, CharacteristicId, RankEntry, RankSource, VersusResult};

/// An open, exclusive transaction over one characteristic's rank rows
pub trait RankTransaction {
    /// Characteristic this transaction is scoped to
    fn characteristic(&self) -> CharacteristicId;

    /// Staged entries, ascending by rank
    fn entries(&self) -> &[RankEntry];

    /// Move an existing value to a new rank
    ///
    /// # Errors
    ///
    /// Fails if the value is not ranked or another value already holds `rank`.
    fn set_rank(&mut self, value: &str, rank: u32) -> VersusResult<()>;

    /// Create a new entry
    ///
    /// # Errors
    ///
    /// Fails if the value is already ranked or `rank` is taken.
    fn create(&mut self, value: &str, rank: u32) -> VersusResult<RankEntry>;

    /// Publish all staged writes atomically
    ///
    /// # Errors
    ///
    /// Fails if the writes could not be published; nothing is published then.
    fn commit(self) -> VersusResult<()>
    where
        Self: Sized;
}

/// Storage for rank lists that can open exclusive transactions
pub trait RankStore: RankSource {
    /// Transaction type handed out by [`RankStore::begin`]
    type Transaction<'a>: RankTransaction
    where
        Self: 'a;

    /// Open an exclusive transaction over a characteristic's rank rows
    ///
    /// # Errors
    ///
    /// `ConcurrentRankConflict` if the rows could not be acquired.
    fn begin(&self, characteristic: &CharacteristicDef) -> VersusResult<Self::Transaction<'_>>;
}
