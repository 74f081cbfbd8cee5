//! Products from different categories are rejected before any lookup

use crate::common::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use versus::{CategoryId, CharacteristicId, ProductId, RankingContext};

#[derive(Default)]
struct CountingCatalog {
    characteristic_calls: AtomicUsize,
    value_calls: AtomicUsize,
}

impl CatalogSource for CountingCatalog {
    fn characteristics(&self, _: CategoryId) -> VersusResult<Vec<CharacteristicDef>> {
        self.characteristic_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    fn product_value(&self, _: ProductId, _: CharacteristicId) -> VersusResult<Option<String>> {
        self.value_calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

#[derive(Default)]
struct CountingRanks {
    calls: AtomicUsize,
}

impl RankSource for CountingRanks {
    fn ranking(&self, _: CharacteristicId) -> VersusResult<RankingContext> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RankingContext::default())
    }
}

fn product(id: u64, category: u64) -> Product {
    Product {
        id: ProductId::new(id),
        category: CategoryId::new(category),
        title: format!("product {id}"),
    }
}

#[test]
fn mismatch_makes_zero_fetches() {
    let catalog = Arc::new(CountingCatalog::default());
    let ranks = Arc::new(CountingRanks::default());
    let engine = ProductComparisonEngine::new(Arc::clone(&catalog), Arc::clone(&ranks));

    let err = engine.compare(&product(1, 1), &product(2, 2)).unwrap_err();
    assert_eq!(
        err,
        VersusError::CategoryMismatch {
            first: CategoryId::new(1),
            second: CategoryId::new(2),
        }
    );
    assert_eq!(catalog.characteristic_calls.load(Ordering::SeqCst), 0);
    assert_eq!(catalog.value_calls.load(Ordering::SeqCst), 0);
    assert_eq!(ranks.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn same_category_reads_catalog() {
    let catalog = Arc::new(CountingCatalog::default());
    let ranks = Arc::new(CountingRanks::default());
    let engine = ProductComparisonEngine::new(Arc::clone(&catalog), Arc::clone(&ranks));

    let report = engine.compare(&product(1, 1), &product(2, 1)).unwrap();
    assert!(report.is_empty());
    assert_eq!(catalog.characteristic_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn mismatch_between_real_categories() {
    let h = Headphones::new();
    let laptops = h.catalog.create_category("Laptops", "");
    let laptop = h.catalog.add_product(laptops.id, "L").unwrap();

    let err = h.engine().compare(&h.a, &laptop).unwrap_err();
    assert!(matches!(err, VersusError::CategoryMismatch { .. }));
    assert!(err.to_string().contains(&h.category.id.to_string()));
}
