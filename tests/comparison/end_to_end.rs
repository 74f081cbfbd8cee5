//! Full comparisons over the headphones fixture

use crate::common::*;

#[test]
fn impedance_smaller_is_better() {
    let h = Headphones::new();
    let report = h.engine().compare(&h.a, &h.b).unwrap();

    let outcome = report.get("impedance").unwrap();
    assert_eq!(outcome.signed_cmp(), -1);
    let winner = outcome.winner().unwrap();
    assert_eq!(winner.raw(), "16");
    assert_eq!(
        Some(winner.clone()),
        h.catalog.value_by_name(h.b.id, "impedance").unwrap()
    );
}

#[test]
fn build_rated_by_rank() {
    let h = Headphones::new();
    assert_eq!(h.list.rank_of(&h.build, "metal").unwrap(), Some(1));
    assert_eq!(h.list.rank_of(&h.build, "plastic").unwrap(), Some(2));

    let report = h.engine().compare(&h.a, &h.b).unwrap();
    let outcome = report.get("build").unwrap();
    assert_eq!(outcome.signed_cmp(), -1);
    assert_eq!(outcome.winner().unwrap().raw(), "metal");
    assert_eq!(outcome.loser().unwrap().raw(), "plastic");
}

#[test]
fn report_follows_declared_order() {
    let h = Headphones::new();
    let report = h.engine().compare(&h.a, &h.b).unwrap();

    let names: Vec<_> = report.names().collect();
    assert_eq!(names, vec!["impedance", "battery", "wireless", "build"]);
    assert_eq!(report.first(), h.a.id);
    assert_eq!(report.second(), h.b.id);

    // A: 32 ohm, 30 h, wireless, plastic. B: 16 ohm, 20 h, wired, metal.
    let signs: Vec<i32> = report.rows().iter().map(|row| row.signed_cmp).collect();
    assert_eq!(signs, vec![-1, 1, 1, -1]);
    let score = report.score();
    assert_eq!((score.first_wins, score.second_wins, score.ties), (2, 2, 0));
}

#[test]
fn equal_values_tie() {
    let h = Headphones::new();
    let c = h.catalog.add_product(h.category.id, "C").unwrap();
    h.record(&c, ["32", "30.0", "1", "plastic"]);

    let report = h.engine().compare(&h.a, &c).unwrap();
    assert!(report.iter().all(|(_, outcome)| outcome.is_tie()));
    assert_eq!(report.score().ties, 4);
}

#[test]
fn missing_value_fails_whole_comparison() {
    let h = Headphones::new();
    let c = h.catalog.add_product(h.category.id, "C").unwrap();
    h.catalog.record_value(c.id, h.impedance.id, "8").unwrap();

    let err = h.engine().compare(&h.a, &c).unwrap_err();
    assert_eq!(
        err,
        VersusError::MissingCharacteristicValue {
            product: c.id,
            characteristic: "battery".to_string(),
        }
    );
}

#[test]
fn unranked_value_fails_whole_comparison() {
    let h = Headphones::new();
    let c = h.catalog.add_product(h.category.id, "C").unwrap();
    h.record(&c, ["16", "20", "no", "wood"]);

    let err = h.engine().compare(&h.a, &c).unwrap_err();
    assert_eq!(
        err,
        VersusError::ValueNotRanked {
            characteristic: "build".to_string(),
            value: "wood".to_string(),
        }
    );

    // Ranking the value makes the comparison succeed
    h.list.add(&h.build, "wood", None).unwrap();
    let report = h.engine().compare(&h.a, &c).unwrap();
    assert_eq!(report.get("build").unwrap().signed_cmp(), 1);
}

#[test]
fn report_serializes_to_json() {
    let h = Headphones::new();
    let report = h.engine().compare(&h.a, &h.b).unwrap();

    let json = serde_json::to_value(report.rows()).unwrap();
    assert_eq!(json[0]["characteristic"], "impedance");
    assert_eq!(json[0]["first_value"], "32");
    assert_eq!(json[0]["signed_cmp"], -1);
}
