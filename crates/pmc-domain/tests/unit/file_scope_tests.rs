//! Unit tests for file scope selection

use pmc_domain::FileScope;

#[test]
fn test_default_scope_is_tracked() {
    assert_eq!(FileScope::default(), FileScope::Tracked);
}

#[test]
fn test_parse_scope() {
    assert_eq!("tracked".parse::<FileScope>(), Ok(FileScope::Tracked));
    assert_eq!("ALL".parse::<FileScope>(), Ok(FileScope::Tracked));
    assert_eq!("Changed".parse::<FileScope>(), Ok(FileScope::Changed));
    assert!("staged".parse::<FileScope>().is_err());
}

#[test]
fn test_scope_display_round_trips() {
    for scope in [FileScope::Tracked, FileScope::Changed] {
        assert_eq!(scope.to_string().parse::<FileScope>(), Ok(scope));
    }
}

#[test]
fn test_scope_serializes_lowercase() {
    let json = serde_json::to_string(&FileScope::Changed).expect("serialize");
    assert_eq!(json, r#""changed""#);
}
