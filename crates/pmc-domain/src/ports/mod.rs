//! Domain ports
//!
//! Interfaces the core depends on. Implementations live in `pmc-providers`.

pub mod extractor;
pub mod revision_source;

pub use extractor::SymbolExtractor;
pub use revision_source::RevisionSource;
