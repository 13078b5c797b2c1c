// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use yare::parameterized;

type Item = super::Item<&'static str>;

#[parameterized(
    null = { json!(null), "null" },
    boolean = { json!(true), "a boolean" },
    number = { json!(42), "a number" },
    string = { json!("string"), "a string" },
)]
fn scalar_values_are_not_collections(value: Value, expected: &'static str) {
    let err = Sources::try_from(Item::from(value)).unwrap_err();
    assert_eq!(err, BuildError::InvalidInputKind { found: expected });
}

#[test]
fn single_source_is_not_a_collection() {
    let err = Sources::try_from(Item::Source("emitter")).unwrap_err();
    assert!(matches!(err, BuildError::InvalidInputKind { .. }));
}

#[test]
fn list_classifies_each_element() {
    let sources = Sources::try_from(Item::List(vec![
        Item::Source("a"),
        Item::Value(json!("notAnEvent")),
        Item::List(vec![]),
    ]))
    .unwrap();

    let Sources::Indexed(members) = sources else {
        panic!("expected indexed sources");
    };
    assert_eq!(members.len(), 3);
    assert!(matches!(members[0], Member::Source("a")));
    assert!(matches!(&members[1], Member::Other(o) if o.description() == "\"notAnEvent\""));
    assert!(matches!(&members[2], Member::Other(o) if o.description() == "list of 0 items"));
}

#[test]
fn json_array_becomes_indexed_non_sources() {
    let sources = Sources::try_from(Item::from(json!([1, 2]))).unwrap();
    let Sources::Indexed(members) = sources else {
        panic!("expected indexed sources");
    };
    assert!(members.iter().all(|m| matches!(m, Member::Other(_))));
}

#[test]
fn json_object_becomes_keyed_non_sources() {
    let sources = Sources::try_from(Item::from(json!({ "a": 1 }))).unwrap();
    assert!(matches!(sources, Sources::Keyed(ref m) if m.contains_key("a")));
}

#[test]
fn empty_collections_are_still_collections() {
    assert!(Sources::try_from(Item::List(vec![])).unwrap().is_empty());
    assert!(Sources::try_from(Item::Map(BTreeMap::new())).unwrap().is_empty());
}

#[test]
fn slots_fill_each_position_once() {
    let sources = Sources::indexed(["a", "b"]);
    let mut slots = Slots::shaped_like(&sources);

    assert!(slots.fill(&Position::Index(1), "B"));
    assert!(!slots.fill(&Position::Index(1), "again"));
    assert!(!slots.fill(&Position::Index(5), "out of range"));
    assert!(!slots.fill(&Position::Key("a".into()), "wrong shape"));
    assert_eq!(slots.pending(), vec![Position::Index(0)]);
    assert!(slots.take_complete().is_none());

    assert!(slots.fill(&Position::Index(0), "A"));
    assert_eq!(
        slots.take_complete(),
        Some(Results::Indexed(vec!["A", "B"]))
    );
}

#[test]
fn keyed_slots_keep_every_key() {
    let sources = Sources::keyed([("b", "source-b"), ("a", "source-a")]);
    let mut slots = Slots::shaped_like(&sources);
    assert_eq!(
        slots.pending(),
        vec![Position::Key("a".into()), Position::Key("b".into())]
    );

    slots.fill(&Position::Key("a".into()), 1);
    slots.fill(&Position::Key("b".into()), 2);

    let results = slots.take_complete().unwrap();
    assert_eq!(results.get(&Position::Key("b".into())), Some(&2));
    assert_eq!(results.get(&Position::Index(0)), None);
    assert_eq!(
        results.into_keyed().unwrap(),
        BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)])
    );
}

#[test]
fn position_display() {
    assert_eq!(Position::Index(3).to_string(), "index 3");
    assert_eq!(Position::Key("db".into()).to_string(), "key \"db\"");
}
