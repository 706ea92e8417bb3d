//! Tests for environment variable overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p pmc-infrastructure --test unit config_figment -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use pmc_domain::FileScope;
use pmc_infrastructure::config::ConfigLoader;
use std::env;
use std::fs;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pmc.toml");
    fs::write(&path, "[check]\nbase = \"from-file\"\nhead = \"from-file\"\n").expect("write");
    set_env("PMC__CHECK__HEAD", "from-env");
    set_env("PMC__CHECK__SCOPE", "changed");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_eq!(config.check.base, "from-file");
    assert_eq!(config.check.head, "from-env");
    assert_eq!(config.check.scope, FileScope::Changed);

    remove_env("PMC__CHECK__HEAD");
    remove_env("PMC__CHECK__SCOPE");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_not_loaded() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pmc.toml");
    fs::write(&path, "").expect("write");
    set_env("PMC_LOGGING_LEVEL", "error");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_ne!(config.logging.level, "error");

    remove_env("PMC_LOGGING_LEVEL");
}
