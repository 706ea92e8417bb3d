//! Language-specific symbol extractors
//!
//! Each extractor parses one language with tree-sitter and walks the syntax
//! tree for class and method declarations. Nothing is evaluated.

#[cfg(feature = "lang-ruby")]
pub mod ruby;

#[cfg(feature = "lang-ruby")]
pub use ruby::RubySymbolExtractor;
