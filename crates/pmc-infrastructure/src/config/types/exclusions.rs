//! Exclusion configuration types

use pmc_domain::Exclusions;
use serde::{Deserialize, Serialize};

/// Ignore lists as written in configuration
///
/// Order and duplicates do not matter. File entries containing glob
/// metacharacters are matched as patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionsConfig {
    /// File paths or glob patterns
    pub ignore_files: Vec<String>,

    /// Fully qualified class names
    pub ignore_classes: Vec<String>,

    /// Method names
    pub ignore_methods: Vec<String>,
}

impl ExclusionsConfig {
    /// Convert to the domain exclusion sets
    pub fn to_exclusions(&self) -> Exclusions {
        Exclusions::new()
            .with_ignored_files(self.ignore_files.iter().cloned())
            .with_ignored_classes(self.ignore_classes.iter().cloned())
            .with_ignored_methods(self.ignore_methods.iter().cloned())
    }
}
