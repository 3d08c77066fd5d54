// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! JSON round trips for the value types, behind the `serde` feature.

#![cfg(feature = "serde")]

use dbid::DbidFactory;
use dbid::DbidPair;
use dbid::DbidRange;
use dbid::FactoryConfig;
use dbid::ReusePolicy;

#[test]
fn dbid_is_a_bare_integer() {
    let id = DbidFactory::new().import_integer(42);
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    assert_eq!(serde_json::from_str::<dbid::Dbid>("42").unwrap(), id);
}

#[test]
fn pair_and_range_round_trip() {
    let factory = DbidFactory::new();
    let a = factory.generate_single();
    let b = factory.generate_single();
    let pair = factory.make_pair(b, a);
    let range = factory.generate_static_range(4).unwrap();

    let pair_json = serde_json::to_string(&pair).unwrap();
    assert_eq!(serde_json::from_str::<DbidPair>(&pair_json).unwrap(), pair);

    let range_json = serde_json::to_string(&range).unwrap();
    assert_eq!(serde_json::from_str::<DbidRange>(&range_json).unwrap(), range);
}

#[test]
fn config_round_trip() {
    let config = FactoryConfig::new()
        .with_reuse(ReusePolicy::Fifo)
        .with_liveness_tracking(true)
        .with_first_value(9);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<FactoryConfig>(&json).unwrap(), config);
}

#[test]
fn range_rejects_empty_and_overflowing_input() {
    assert!(serde_json::from_str::<DbidRange>(r#"{"start":3,"len":0}"#).is_err());
    assert!(serde_json::from_str::<DbidRange>(r#"{"start":18446744073709551615,"len":2}"#).is_err());

    let last = serde_json::from_str::<DbidRange>(r#"{"start":18446744073709551614,"len":1}"#).unwrap();
    let factory = DbidFactory::new();
    assert!(!last.contains(factory.import_integer(u64::MAX)));
    assert_eq!(last.iter().count(), 1);
}
