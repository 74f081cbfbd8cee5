//! Rank lists for versus
//!
//! String characteristic values have no intrinsic order, so each rated
//! characteristic keeps a dense, unique list of `{value, rank}` pairs:
//! - RankStore / RankTransaction: exclusive, all-or-nothing mutation scope
//!   over one characteristic's rank rows
//! - MemoryRankStore: thread-safe in-memory implementation
//! - RankedValueList: append and insert-with-shift operations
//!
//! ## Concurrency
//!
//! Insert-with-shift reads every rank at or below the target, rewrites them
//! and creates a new row. Two insertions on the same characteristic must
//! never both observe the pre-shift state, so each runs inside a transaction
//! that holds the characteristic exclusively. Insertions on different
//! characteristics proceed in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod list;
pub mod memory;
pub mod store;

pub use list::RankedValueList;
pub use memory::{MemoryRankStore, MemoryRankTransaction, DEFAULT_LOCK_TIMEOUT};
pub use store::{RankStore, RankTransaction};
