//! Product comparison engine for versus
//!
//! This crate wires the core value model and rank lists into a usable
//! comparison service:
//! - MemoryCatalog: categories, characteristic definitions, products and
//!   their recorded values
//! - ProductComparisonEngine: compares two products of one category
//! - ComparisonReport: per-characteristic outcomes in declared order
//! - VersusConfig: `versus.toml` settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod report;

pub use catalog::MemoryCatalog;
pub use config::{ComparisonConfig, RankingConfig, VersusConfig, CONFIG_FILE_NAME};
pub use engine::ProductComparisonEngine;
pub use report::{ComparisonReport, ComparisonRow, Score};
