//! Unit tests for snapshots

use pmc_domain::{ClassSymbol, Snapshot};

#[test]
fn test_empty_snapshot() {
    let snapshot = Snapshot::default();

    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert_eq!(snapshot.method_count(), 0);
    assert!(!snapshot.contains("Foo"));
}

#[test]
fn test_duplicate_classes_are_unioned() {
    let snapshot = Snapshot::from_symbols([
        ClassSymbol::with_methods("Foo", ["a"]),
        ClassSymbol::with_methods("Bar", ["x"]),
        ClassSymbol::with_methods("Foo", ["b", "a"]),
    ]);

    assert_eq!(snapshot.len(), 2);
    let foo: Vec<&String> = snapshot.public_methods("Foo").expect("Foo").iter().collect();
    assert_eq!(foo, vec!["a", "b"]);
    assert_eq!(snapshot.method_count(), 3);
}

#[test]
fn test_snapshot_keeps_first_seen_order() {
    let snapshot = Snapshot::from_symbols([
        ClassSymbol::new("Zeta"),
        ClassSymbol::new("Alpha"),
        ClassSymbol::new("Zeta"),
        ClassSymbol::new("Mid"),
    ]);

    assert_eq!(
        snapshot.class_names().collect::<Vec<_>>(),
        vec!["Zeta", "Alpha", "Mid"]
    );
    assert_eq!(
        snapshot.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Zeta", "Alpha", "Mid"]
    );
}

#[test]
fn test_class_without_methods_is_present() {
    let snapshot = Snapshot::from_symbols([ClassSymbol::new("Marker")]);

    assert!(snapshot.contains("Marker"));
    assert!(snapshot.get("Marker").is_some_and(|c| c.public_methods.is_empty()));
}

#[test]
fn test_snapshot_serializes_as_class_map() {
    let snapshot = Snapshot::from_symbols([ClassSymbol::with_methods("Foo", ["bar"])]);
    let json = serde_json::to_value(&snapshot).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({ "classes": { "Foo": { "name": "Foo", "public_methods": ["bar"] } } })
    );
}
