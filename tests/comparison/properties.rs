//! Strategy properties checked across the public API

use crate::common::*;
use proptest::prelude::*;
use versus::{CharacteristicValue, Comparator, RankingContext};

fn value(name: &str, kind: CharacteristicKind, raw: &str) -> CharacteristicValue {
    CharacteristicValue::new(name, kind, raw).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn float_strategies_are_mirror_images(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let first = value("weight", CharacteristicKind::Float, &a.to_string());
        let second = value("weight", CharacteristicKind::Float, &b.to_string());

        let smaller = Comparator::SmallerBetter.compare(&first, &second).unwrap();
        let bigger = Comparator::BiggerBetter.compare(&first, &second).unwrap();
        prop_assert_eq!(smaller.signed_cmp(), -bigger.signed_cmp());
        prop_assert_eq!(smaller.is_tie(), first.equals(&second).unwrap());
        prop_assert!(smaller.is_tie() || smaller.winner() != bigger.winner());
    }

    #[test]
    fn string_order_always_unsupported(a in ".*", b in ".*") {
        let first = value("color", CharacteristicKind::String, &a);
        let second = value("color", CharacteristicKind::String, &b);

        let is_unsupported = matches!(
            first.order(&second),
            Err(VersusError::UnsupportedOperation { .. })
        );
        prop_assert!(is_unsupported);
        prop_assert_eq!(first.equals(&second).unwrap(), a == b);
    }

    #[test]
    fn names_must_match(kind_code in 0u8..4, strategy_code in 0u8..3) {
        let kind = CharacteristicKind::from_code(kind_code).unwrap();
        let strategy = ComparisonStrategy::from_code(strategy_code).unwrap();
        let raw = match kind {
            CharacteristicKind::Integer => "1",
            CharacteristicKind::Float => "1.5",
            CharacteristicKind::Boolean => "true",
            CharacteristicKind::String => "metal",
        };
        let ranking = RankingContext::default();
        let comparator = Comparator::for_strategy(strategy, Some(&ranking)).unwrap();

        let err = comparator
            .compare(&value("left", kind, raw), &value("right", kind, raw))
            .unwrap_err();
        let is_mismatch = matches!(err, VersusError::NameMismatch { .. });
        prop_assert!(is_mismatch);
    }
}

#[test]
fn booleans_prefer_true_when_bigger_is_better() {
    let yes = value("wireless", CharacteristicKind::Boolean, "yes");
    let no = value("wireless", CharacteristicKind::Boolean, "0");

    let outcome = Comparator::BiggerBetter.compare(&no, &yes).unwrap();
    assert_eq!(outcome.signed_cmp(), -1);
    assert_eq!(outcome.winner().unwrap().raw(), "yes");
}

#[test]
fn invalid_raw_values_rejected_at_construction() {
    for (kind, raw) in [
        (CharacteristicKind::Integer, "3.5"),
        (CharacteristicKind::Float, "NaN"),
        (CharacteristicKind::Float, "inf"),
        (CharacteristicKind::Boolean, "maybe"),
    ] {
        let err = CharacteristicValue::new("x", kind, raw).unwrap_err();
        assert!(
            matches!(err, VersusError::InvalidValue { .. }),
            "{kind} {raw:?}: {err:?}"
        );
    }
}
