//! Comparison Integration Tests
//!
//! End-to-end product comparison over the in-memory catalog and rank store.

#[path = "../common/mod.rs"]
mod common;

mod category_mismatch;
mod config;
mod end_to_end;
mod parallel;
mod properties;
