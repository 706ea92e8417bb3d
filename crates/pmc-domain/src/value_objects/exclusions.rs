//! Exclusion configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Files, classes and methods left out of every snapshot
///
/// The three lists are independent and are read as sets. They are fixed
/// before extraction starts and never change during a run.
///
/// # Example
///
/// ```
/// use pmc_domain::Exclusions;
///
/// let exclusions = Exclusions::default()
///     .with_ignored_classes(["Legacy::Adapter"])
///     .with_ignored_methods(["to_s", "inspect"]);
///
/// assert!(exclusions.is_class_ignored("Legacy::Adapter"));
/// assert!(exclusions.is_method_ignored("inspect"));
/// assert!(!exclusions.is_method_ignored("call"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// File paths (or glob patterns) that are never extracted
    #[serde(default)]
    pub files: BTreeSet<String>,

    /// Fully qualified class names dropped before merging
    #[serde(default)]
    pub classes: BTreeSet<String>,

    /// Method names that never appear in any snapshot
    #[serde(default)]
    pub methods: BTreeSet<String>,
}

impl Exclusions {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add ignored file paths
    pub fn with_ignored_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Add ignored class names
    pub fn with_ignored_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Add ignored method names
    pub fn with_ignored_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// True if the path is listed verbatim
    pub fn is_file_listed(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// True if the class is excluded
    pub fn is_class_ignored(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }

    /// True if the method is excluded
    pub fn is_method_ignored(&self, method: &str) -> bool {
        self.methods.contains(method)
    }
}
