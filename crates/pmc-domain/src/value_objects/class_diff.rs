//! Class diff value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Removed and added public methods of one class between two snapshots
///
/// # Example
///
/// ```
/// use pmc_domain::ClassDiff;
///
/// let diff = ClassDiff::new("Foo", ["baz"], Vec::<String>::new());
/// assert!(diff.is_breaking());
/// assert!(!diff.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDiff {
    /// Fully qualified class name
    pub class_name: String,

    /// Public methods present in base but not in head
    pub removed: BTreeSet<String>,

    /// Public methods present in head but not in base
    pub added: BTreeSet<String>,
}

impl ClassDiff {
    /// Create a new class diff
    pub fn new<R, A, S, T>(class_name: impl Into<String>, removed: R, added: A) -> Self
    where
        R: IntoIterator<Item = S>,
        A: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            class_name: class_name.into(),
            removed: removed.into_iter().map(Into::into).collect(),
            added: added.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the class surface did not change
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    /// True when at least one public method disappeared
    pub fn is_breaking(&self) -> bool {
        !self.removed.is_empty()
    }
}
