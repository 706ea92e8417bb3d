//! Diff Engine
//!
//! Compares the public surface of two snapshots class by class.

use pmc_domain::{ClassDiff, Snapshot};
use std::collections::BTreeSet;

/// Structural diff between a base and a head snapshot
pub struct DiffEngine;

impl DiffEngine {
    /// Compare `head` against `base`
    ///
    /// Iteration is driven by the base snapshot, in its insertion order. A
    /// class missing from head counts as having no public methods, so all of
    /// its methods are reported as removed. Classes that only exist in head
    /// are not reported. Unchanged classes produce no entry.
    pub fn compare(base: &Snapshot, head: &Snapshot) -> Vec<ClassDiff> {
        let empty = BTreeSet::new();

        base.iter()
            .filter_map(|class| {
                let head_methods = head.public_methods(&class.name).unwrap_or(&empty);
                let diff = ClassDiff::new(
                    class.name.as_str(),
                    class.public_methods.difference(head_methods),
                    head_methods.difference(&class.public_methods),
                );
                (!diff.is_empty()).then_some(diff)
            })
            .collect()
    }
}
