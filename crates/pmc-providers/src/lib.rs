//! # PMC - Provider Implementations
//!
//! Implementations of the ports defined in `pmc-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Language | `SymbolExtractor` | Ruby (tree-sitter) |
//! | Revision | `RevisionSource` | Git, Directory, InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! pmc-providers = { version = "0.1", default-features = false, features = ["lang-ruby", "revision-directory"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use pmc_providers::language::RubySymbolExtractor;
//! use pmc_providers::revision::GitRevisionSource;
//! ```

// Re-export pmc-domain types commonly used with providers
pub use pmc_domain::error::{Error, Result};
pub use pmc_domain::ports::{RevisionSource, SymbolExtractor};

/// Symbol extractor implementations
///
/// Implements `SymbolExtractor` for each recognized source language.
pub mod language;

/// Revision source implementations
///
/// Implements `RevisionSource` for version control and plain directories.
pub mod revision;

#[cfg(feature = "lang-ruby")]
pub use language::RubySymbolExtractor;

#[cfg(feature = "revision-directory")]
pub use revision::DirectoryRevisionSource;
#[cfg(feature = "revision-git")]
pub use revision::GitRevisionSource;
pub use revision::InMemoryRevisionSource;
