//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Once};
pub use versus::{
    CatalogSource, Category, CharacteristicDef, CharacteristicKind, ComparisonOutcome,
    ComparisonStrategy, MemoryCatalog, MemoryRankStore, Product, ProductComparisonEngine,
    RankSource, RankedValueList, VersusConfig, VersusError, VersusResult,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness once per binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ============================================================================
// Headphones fixture
// ============================================================================

/// A headphones category with one characteristic per strategy and two
/// products: A (32 ohm, plastic) and B (16 ohm, metal).
pub struct Headphones {
    pub catalog: Arc<MemoryCatalog>,
    pub ranks: Arc<MemoryRankStore>,
    pub list: RankedValueList<MemoryRankStore>,
    pub category: Category,
    pub impedance: CharacteristicDef,
    pub battery: CharacteristicDef,
    pub wireless: CharacteristicDef,
    pub build: CharacteristicDef,
    pub a: Product,
    pub b: Product,
}

impl Headphones {
    pub fn new() -> Self {
        init_tracing();
        let catalog = Arc::new(MemoryCatalog::new());
        let ranks = Arc::new(MemoryRankStore::new());
        let list = RankedValueList::new(Arc::clone(&ranks));
        let category = catalog.create_category("Headphones", "Over-ear headphones");

        let define = |name: &str, kind, strategy| {
            catalog
                .define_characteristic(category.id, name, kind, strategy)
                .expect("define characteristic")
        };
        let impedance = define(
            "impedance",
            CharacteristicKind::Integer,
            ComparisonStrategy::SmallerBetter,
        );
        let battery = define(
            "battery",
            CharacteristicKind::Float,
            ComparisonStrategy::BiggerBetter,
        );
        let wireless = define(
            "wireless",
            CharacteristicKind::Boolean,
            ComparisonStrategy::BiggerBetter,
        );
        let build = define(
            "build",
            CharacteristicKind::String,
            ComparisonStrategy::Rating,
        );

        list.append_at_end(&build, "metal").expect("rank metal");
        list.append_at_end(&build, "plastic").expect("rank plastic");

        let a = catalog.add_product(category.id, "A").expect("add A");
        let b = catalog.add_product(category.id, "B").expect("add B");

        let fixture = Headphones {
            catalog,
            ranks,
            list,
            category,
            impedance,
            battery,
            wireless,
            build,
            a,
            b,
        };
        fixture.record(&fixture.a, ["32", "30", "yes", "plastic"]);
        fixture.record(&fixture.b, ["16", "20", "no", "metal"]);
        fixture
    }

    /// Record impedance, battery, wireless and build for a product.
    pub fn record(&self, product: &Product, values: [&str; 4]) {
        let defs = [&self.impedance, &self.battery, &self.wireless, &self.build];
        for (def, raw) in defs.iter().zip(values) {
            self.catalog
                .record_value(product.id, def.id, raw)
                .expect("record value");
        }
    }

    pub fn engine(&self) -> ProductComparisonEngine<MemoryCatalog, MemoryRankStore> {
        ProductComparisonEngine::new(Arc::clone(&self.catalog), Arc::clone(&self.ranks))
    }
}
