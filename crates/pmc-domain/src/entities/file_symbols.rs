//! Per-file symbol table

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classes and public methods declared in a single file
///
/// Produced by a [`SymbolExtractor`](crate::ports::SymbolExtractor). Classes keep
/// the order in which they were opened in the file; no cross-file merging
/// happens at this stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSymbols {
    /// Path of the file the symbols were extracted from
    pub path: String,

    /// Class name to public method names
    pub classes: IndexMap<String, BTreeSet<String>>,
}

impl FileSymbols {
    /// Create an empty symbol table for a file
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            classes: IndexMap::new(),
        }
    }

    /// Record that a class is declared in this file, even without methods
    pub fn declare_class(&mut self, class_name: &str) {
        if !self.classes.contains_key(class_name) {
            self.classes.insert(class_name.to_string(), BTreeSet::new());
        }
    }

    /// Record a public method on a class
    pub fn add_method(&mut self, class_name: &str, method: impl Into<String>) {
        self.declare_class(class_name);
        if let Some(methods) = self.classes.get_mut(class_name) {
            methods.insert(method.into());
        }
    }

    /// Public methods recorded for a class in this file
    pub fn methods(&self, class_name: &str) -> Option<&BTreeSet<String>> {
        self.classes.get(class_name)
    }

    /// True when no class was found in the file
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
