//! Class symbol entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Public surface of one class (or module) within a snapshot
///
/// When a class is reopened in several files, the snapshot keeps a single
/// symbol whose method set is the union of every declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSymbol {
    /// Fully qualified name, e.g. `Billing::Invoice`
    pub name: String,

    /// Names of the public instance methods
    pub public_methods: BTreeSet<String>,
}

impl ClassSymbol {
    /// Create a class symbol with no public methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_methods: BTreeSet::new(),
        }
    }

    /// Create a class symbol with the given public methods
    pub fn with_methods<I, S>(name: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            public_methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Union another declaration of the same class into this one
    pub fn merge<I>(&mut self, methods: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.public_methods.extend(methods);
    }
}
