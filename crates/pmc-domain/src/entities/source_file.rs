//! Source file entity

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One file of a revision, as supplied by a revision source
///
/// The content is untrusted text. Nothing in this workspace evaluates it.
///
/// # Example
///
/// ```
/// use pmc_domain::SourceFile;
///
/// let file = SourceFile::new("lib/foo.rb", "class Foo\nend\n");
/// assert_eq!(file.extension(), Some("rb"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path relative to the revision root, with `/` separators
    pub path: String,

    /// Full text of the file
    pub content: String,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.path).extension().and_then(|ext| ext.to_str())
    }
}
