//! In-memory revision source
//!
//! Holds fixed file sets per revision label. Used by tests and by callers
//! that already have both snapshots in memory.

use pmc_domain::error::{Error, Result};
use pmc_domain::{RevisionSource, SourceFile};
use std::collections::{BTreeSet, HashMap};

/// Revision source over files registered up front
#[derive(Debug, Default, Clone)]
pub struct InMemoryRevisionSource {
    revisions: HashMap<String, Vec<SourceFile>>,
}

impl InMemoryRevisionSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the files of a revision, replacing any previous set
    pub fn with_revision<I>(mut self, revision: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = SourceFile>,
    {
        self.revisions
            .insert(revision.into(), files.into_iter().collect());
        self
    }

    fn files(&self, revision: &str) -> Result<&[SourceFile]> {
        self.revisions
            .get(revision)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::revision(revision, "unknown revision"))
    }
}

impl RevisionSource for InMemoryRevisionSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        Ok(self
            .files(revision)?
            .iter()
            .map(|file| file.path.clone())
            .collect())
    }

    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base_files = self.files(base)?;
        let head_files = self.files(head)?;
        let lookup = |files: &[SourceFile], path: &str| {
            files
                .iter()
                .find(|file| file.path == path)
                .map(|file| file.content.clone())
        };

        let paths: BTreeSet<&str> = base_files
            .iter()
            .chain(head_files)
            .map(|file| file.path.as_str())
            .collect();

        Ok(paths
            .into_iter()
            .filter(|path| lookup(base_files, path) != lookup(head_files, path))
            .map(str::to_string)
            .collect())
    }

    fn read_file(&self, revision: &str, path: &str) -> Result<String> {
        self.files(revision)?
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.content.clone())
            .ok_or_else(|| Error::file_access(path, format!("not present at `{revision}`")))
    }
}
