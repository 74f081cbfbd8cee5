//! Parallel evaluation and concurrent comparisons

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn wide_catalog(characteristics: usize) -> (Arc<MemoryCatalog>, Product, Product) {
    let catalog = Arc::new(MemoryCatalog::new());
    let category = catalog.create_category("Wide", "");
    let a = catalog.add_product(category.id, "A").unwrap();
    let b = catalog.add_product(category.id, "B").unwrap();

    for i in 0..characteristics {
        let strategy = if i % 2 == 0 {
            ComparisonStrategy::SmallerBetter
        } else {
            ComparisonStrategy::BiggerBetter
        };
        let def = catalog
            .define_characteristic(
                category.id,
                format!("c{i:03}"),
                CharacteristicKind::Integer,
                strategy,
            )
            .unwrap();
        catalog.record_value(a.id, def.id, i.to_string()).unwrap();
        catalog
            .record_value(b.id, def.id, (characteristics - i).to_string())
            .unwrap();
    }
    (catalog, a, b)
}

#[test]
fn parallel_report_matches_sequential() {
    let (catalog, a, b) = wide_catalog(64);
    let ranks = Arc::new(MemoryRankStore::new());

    let mut config = VersusConfig::default();
    config.comparison.parallel = true;
    let parallel =
        ProductComparisonEngine::with_config(Arc::clone(&catalog), Arc::clone(&ranks), &config);
    let sequential = ProductComparisonEngine::new(catalog, ranks);

    let expected = sequential.compare(&a, &b).unwrap();
    let actual = parallel.compare(&a, &b).unwrap();
    assert_eq!(actual, expected);

    let names: Vec<_> = actual.names().collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted, "declared order preserved");
}

#[test]
fn parallel_failure_aborts() {
    let (catalog, a, _) = wide_catalog(16);
    let c = catalog.add_product(a.category, "C").unwrap();

    let mut config = VersusConfig::default();
    config.comparison.parallel = true;
    let engine =
        ProductComparisonEngine::with_config(catalog, Arc::new(MemoryRankStore::new()), &config);

    let err = engine.compare(&a, &c).unwrap_err();
    assert!(matches!(err, VersusError::MissingCharacteristicValue { .. }));
}

#[test]
fn comparisons_run_alongside_rank_inserts() {
    let h = Arc::new(Headphones::new());
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads + 1));

    let writer = {
        let h = Arc::clone(&h);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..100 {
                h.list.insert_at(&h.build, &format!("alloy-{i}"), 1).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..threads)
        .map(|_| {
            let h = Arc::clone(&h);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let engine = h.engine();
                barrier.wait();
                for _ in 0..50 {
                    let report = engine.compare(&h.a, &h.b).unwrap();
                    // metal always stays ahead of plastic
                    assert_eq!(report.get("build").unwrap().signed_cmp(), -1);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(h.list.rank_of(&h.build, "metal").unwrap(), Some(101));
    assert_eq!(h.list.rank_of(&h.build, "plastic").unwrap(), Some(102));
}
