//! Composition root tests

use pmc_domain::{Error, FileScope};
use pmc_infrastructure::config::{AppConfig, SourceKind};
use pmc_infrastructure::init_app;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(full, content).expect("write file");
}

fn directory_config(root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.check.source = SourceKind::Directory;
    config.check.repository = root.to_path_buf();
    config.check.base = "base".to_string();
    config.check.head = "head".to_string();
    config
}

fn checkouts() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(
        &dir.path().join("base"),
        "lib/foo.rb",
        "class Foo\n  def bar; end\n  def baz; end\nend\n",
    );
    write(
        &dir.path().join("head"),
        "lib/foo.rb",
        "class Foo\n  def bar; end\n  def qux; end\nend\n",
    );
    dir
}

#[test]
fn test_directory_source_end_to_end() {
    let dir = checkouts();
    let context = init_app(directory_config(dir.path())).expect("init");

    assert_eq!(context.source().name(), "directory");
    assert_eq!(context.extractor().language(), "ruby");

    let report = context.run_check().expect("run");
    assert!(!report.passed());
    assert_eq!(
        report
            .annotations
            .iter()
            .map(|a| a.message.as_str())
            .collect::<Vec<_>>(),
        vec![
            "In class `Foo` public methods were removed: baz",
            "In class `Foo` public methods were added: qux",
        ]
    );
}

#[test]
fn test_exclusions_flow_from_config() {
    let dir = checkouts();
    let mut config = directory_config(dir.path());
    config.exclusions.ignore_methods = vec!["baz".to_string()];
    config.check.workers = Some(2);
    config.check.scope = FileScope::Changed;

    let context = init_app(config).expect("init");
    let check = context.public_methods_check().expect("check");
    assert_eq!(check.scope(), FileScope::Changed);

    let report = context.run_check().expect("run");
    assert!(report.passed());
}

#[test]
fn test_invalid_glob_fails_when_building_check() {
    let dir = checkouts();
    let mut config = directory_config(dir.path());
    config.exclusions.ignore_files = vec!["lib/[broken".to_string()];

    let context = init_app(config).expect("init");
    assert!(matches!(
        context.public_methods_check(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_git_source_requires_repository() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.check.repository = dir.path().join("nowhere");

    assert!(matches!(init_app(config), Err(Error::Repository { .. })));
}
