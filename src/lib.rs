//! Versus - typed product characteristics and side-by-side comparison
//!
//! Products in a category record values for the category's characteristics.
//! Each characteristic has a kind (integer, float, boolean or string) and a
//! comparison strategy (smaller is better, bigger is better, or by rating).
//! Comparing two products yields one outcome per characteristic.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use versus::{
//!     CharacteristicKind, ComparisonStrategy, MemoryCatalog, MemoryRankStore,
//!     ProductComparisonEngine,
//! };
//!
//! # fn main() -> versus::VersusResult<()> {
//! let catalog = Arc::new(MemoryCatalog::new());
//! let headphones = catalog.create_category("Headphones", "");
//! let impedance = catalog.define_characteristic(
//!     headphones.id,
//!     "impedance",
//!     CharacteristicKind::Integer,
//!     ComparisonStrategy::SmallerBetter,
//! )?;
//!
//! let a = catalog.add_product(headphones.id, "A")?;
//! let b = catalog.add_product(headphones.id, "B")?;
//! catalog.record_value(a.id, impedance.id, "32")?;
//! catalog.record_value(b.id, impedance.id, "16")?;
//!
//! let engine = ProductComparisonEngine::new(catalog, Arc::new(MemoryRankStore::new()));
//! let report = engine.compare(&a, &b)?;
//! assert_eq!(report.get("impedance").map(|o| o.signed_cmp()), Some(-1));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `versus-core`: value model, comparators, errors, collaborator traits
//! - `versus-ranking`: transactional rank lists for rated characteristics
//! - `versus-engine`: catalog, comparison engine, reports and config

pub use versus_core::*;
pub use versus_engine::*;
pub use versus_ranking::*;
