//! Unit tests for per-file symbol tables

use pmc_domain::FileSymbols;

#[test]
fn test_declare_class_without_methods() {
    let mut symbols = FileSymbols::new("lib/foo.rb");
    symbols.declare_class("Foo");

    assert!(!symbols.is_empty());
    assert!(symbols.methods("Foo").is_some_and(|m| m.is_empty()));
    assert!(symbols.methods("Bar").is_none());
}

#[test]
fn test_add_method_declares_class_and_dedups() {
    let mut symbols = FileSymbols::new("lib/foo.rb");
    symbols.add_method("Foo", "bar");
    symbols.add_method("Foo", "bar");
    symbols.add_method("Foo", "alpha");

    let methods: Vec<&String> = symbols.methods("Foo").expect("declared").iter().collect();
    assert_eq!(methods, vec!["alpha", "bar"]);
}

#[test]
fn test_classes_keep_declaration_order() {
    let mut symbols = FileSymbols::new("lib/foo.rb");
    symbols.declare_class("Zeta");
    symbols.declare_class("Alpha");
    symbols.declare_class("Zeta");

    let names: Vec<&String> = symbols.classes.keys().collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}
