//! Snapshot entity
//!
//! The complete public-API picture of a codebase at one revision.

use super::ClassSymbol;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Class name to public surface, for one revision
///
/// A snapshot is assembled once from fully merged class symbols and is
/// read-only afterwards. Iteration follows insertion order, which is the
/// order in which classes were first seen during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    classes: IndexMap<String, ClassSymbol>,
}

impl Snapshot {
    /// Build a snapshot from merged class symbols
    ///
    /// Symbols sharing a name are unioned, so callers cannot produce a
    /// snapshot holding two entries for one class.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = ClassSymbol>,
    {
        let mut classes: IndexMap<String, ClassSymbol> = IndexMap::new();
        for symbol in symbols {
            match classes.get_mut(&symbol.name) {
                Some(existing) => existing.merge(symbol.public_methods),
                None => {
                    classes.insert(symbol.name.clone(), symbol);
                }
            }
        }
        Self { classes }
    }

    /// Look up a class by fully qualified name
    pub fn get(&self, class_name: &str) -> Option<&ClassSymbol> {
        self.classes.get(class_name)
    }

    /// Public methods of a class, if the class exists in this snapshot
    pub fn public_methods(&self, class_name: &str) -> Option<&BTreeSet<String>> {
        self.classes.get(class_name).map(|c| &c.public_methods)
    }

    /// True if the class is declared anywhere in the snapshot
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Iterate classes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ClassSymbol> {
        self.classes.values()
    }

    /// Class names in insertion order
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Number of classes in the snapshot
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when the snapshot holds no class
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of public methods across all classes
    pub fn method_count(&self) -> usize {
        self.classes.values().map(|c| c.public_methods.len()).sum()
    }
}
