//! # PMC Domain
//!
//! Core types for tracking the public API surface of a codebase between two
//! revisions.
//!
//! ## Architecture
//!
//! - `entities` - Source files, per-file symbol tables, class symbols and snapshots
//! - `value_objects` - Class diffs, exclusions, file scope and per-file warnings
//! - `ports` - Interfaces for symbol extraction and revision access
//! - `error` - Domain error type and `Result` alias
//!
//! Everything here is plain data. Parsing, version control and reporting live in
//! the outer crates and meet the domain through the traits in [`ports`].

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ClassSymbol, FileSymbols, Snapshot, SourceFile};
pub use error::{Error, Result};
pub use ports::{RevisionSource, SymbolExtractor};
pub use value_objects::{ClassDiff, Exclusions, FileScope, FileWarning, FileWarningKind};
