//! Domain entities
//!
//! Data that flows from raw file content to a finished snapshot.

pub mod class_symbol;
pub mod file_symbols;
pub mod snapshot;
pub mod source_file;

pub use class_symbol::ClassSymbol;
pub use file_symbols::FileSymbols;
pub use snapshot::Snapshot;
pub use source_file::SourceFile;
