//! Unit tests for the diff engine

use pmc_application::DiffEngine;
use pmc_domain::{ClassDiff, ClassSymbol, Snapshot};

fn snapshot(classes: &[(&str, &[&str])]) -> Snapshot {
    Snapshot::from_symbols(
        classes
            .iter()
            .map(|(name, methods)| ClassSymbol::with_methods(*name, methods.iter().copied())),
    )
}

#[test]
fn test_self_diff_is_empty() {
    let base = snapshot(&[("Foo", &["bar", "baz"]), ("Empty", &[])]);

    assert!(DiffEngine::compare(&base, &base).is_empty());
}

#[test]
fn test_removed_method() {
    let base = snapshot(&[("Foo", &["bar", "baz"])]);
    let head = snapshot(&[("Foo", &["bar"])]);

    assert_eq!(
        DiffEngine::compare(&base, &head),
        vec![ClassDiff::new("Foo", ["baz"], Vec::<String>::new())]
    );
}

#[test]
fn test_added_method() {
    let base = snapshot(&[("Foo", &["bar"])]);
    let head = snapshot(&[("Foo", &["bar", "qux"])]);

    assert_eq!(
        DiffEngine::compare(&base, &head),
        vec![ClassDiff::new("Foo", Vec::<String>::new(), ["qux"])]
    );
}

#[test]
fn test_class_removed_in_head_loses_every_method() {
    let base = snapshot(&[("Foo", &["bar", "baz"])]);
    let head = snapshot(&[]);

    assert_eq!(
        DiffEngine::compare(&base, &head),
        vec![ClassDiff::new("Foo", ["bar", "baz"], Vec::<String>::new())]
    );
}

#[test]
fn test_class_only_in_head_is_not_reported() {
    let base = snapshot(&[("Foo", &["bar"])]);
    let head = snapshot(&[("Foo", &["bar"]), ("Fresh", &["call"])]);

    assert!(DiffEngine::compare(&base, &head).is_empty());
}

#[test]
fn test_diffs_follow_base_order() {
    let base = snapshot(&[("Zeta", &["a"]), ("Alpha", &["a"]), ("Mid", &["a"])]);
    let head = snapshot(&[("Alpha", &[]), ("Mid", &[]), ("Zeta", &[])]);

    let order: Vec<String> = DiffEngine::compare(&base, &head)
        .into_iter()
        .map(|diff| diff.class_name)
        .collect();
    assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_removed_and_added_in_one_class() {
    let base = snapshot(&[("Foo", &["old", "kept"])]);
    let head = snapshot(&[("Foo", &["kept", "new"])]);

    let diffs = DiffEngine::compare(&base, &head);
    assert_eq!(diffs.len(), 1);
    assert!(diffs[0].removed.contains("old"));
    assert!(diffs[0].added.contains("new"));
    assert!(!diffs[0].removed.contains("kept"));
}
