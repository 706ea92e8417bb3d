//! Symbol Extractor Port
//!
//! Turns the text of one source file into its declared classes and public
//! methods. Implementations must recognize declarations structurally and must
//! never evaluate the content.

use crate::entities::{FileSymbols, SourceFile};
use crate::error::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Per-file declaration extractor
///
/// # Example
///
/// ```ignore
/// use pmc_domain::{SourceFile, SymbolExtractor};
///
/// let file = SourceFile::new("lib/foo.rb", "class Foo\n  def bar; end\nend\n");
/// let symbols = extractor.extract(&file, &Default::default())?;
/// assert!(symbols.methods("Foo").unwrap().contains("bar"));
/// ```
pub trait SymbolExtractor: Send + Sync {
    /// Name of the recognized language
    fn language(&self) -> &'static str;

    /// File extension (without the dot) this extractor understands
    fn extension(&self) -> &'static str;

    /// True if the path has this extractor's extension
    fn handles(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension())
    }

    /// Extract classes and their public methods from one file
    ///
    /// Methods named in `ignored_methods` are left out. A file that cannot be
    /// parsed yields [`Error::FileParse`](crate::Error::FileParse) and no symbols.
    fn extract(&self, file: &SourceFile, ignored_methods: &BTreeSet<String>)
    -> Result<FileSymbols>;
}
