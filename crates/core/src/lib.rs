//! Core types and traits for versus
//!
//! This crate defines the typed-value comparison model:
//! - CharacteristicKind / ParsedValue: primitive kinds with parse/format rules
//! - CharacteristicValue: named, typed, immutable value with `equals`/`order`
//! - ComparisonStrategy / Comparator: smaller-better, bigger-better, rating
//! - ComparisonOutcome: `Better` or `Tie` with a signed indicator
//! - RankEntry / RankingContext: ranked string values
//! - Catalog types: CategoryId, ProductId, CharacteristicId, CharacteristicDef
//! - VersusError: error type hierarchy
//! - Traits: CatalogSource, RankSource collaborator seams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod error;
pub mod kind;
pub mod outcome;
pub mod rank;
pub mod strategy;
pub mod traits;
pub mod types;
pub mod value;

pub use comparator::Comparator;
pub use error::{VersusError, VersusResult};
pub use kind::{CharacteristicKind, ParseValueError, ParsedValue};
pub use outcome::ComparisonOutcome;
pub use rank::{max_rank, RankEntry, RankingContext};
pub use strategy::ComparisonStrategy;
pub use traits::{CatalogSource, RankSource};
pub use types::{Category, CategoryId, CharacteristicDef, CharacteristicId, Product, ProductId};
pub use value::CharacteristicValue;
