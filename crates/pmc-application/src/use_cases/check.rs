//! Public Methods Check Use Case
//!
//! Loads both revisions from a [`RevisionSource`], builds their snapshots
//! and reports which public methods were removed or added.

use crate::domain_services::{DiffEngine, SnapshotBuilder};
use crate::report::CheckReport;
use pmc_domain::error::Result;
use pmc_domain::{FileScope, FileWarning, RevisionSource, SourceFile};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Files of one revision, plus the ones that could not be read
struct LoadedRevision {
    files: Vec<SourceFile>,
    warnings: Vec<FileWarning>,
}

/// Compares the public API of two revisions
pub struct PublicMethodsCheck {
    source: Arc<dyn RevisionSource>,
    builder: SnapshotBuilder,
    scope: FileScope,
}

impl PublicMethodsCheck {
    /// Create a check over every tracked file
    pub fn new(source: Arc<dyn RevisionSource>, builder: SnapshotBuilder) -> Self {
        Self {
            source,
            builder,
            scope: FileScope::default(),
        }
    }

    /// Restrict which files take part in the comparison
    pub fn with_scope(mut self, scope: FileScope) -> Self {
        self.scope = scope;
        self
    }

    /// File scope in effect
    pub fn scope(&self) -> FileScope {
        self.scope
    }

    /// Compare `head` against `base`
    ///
    /// Fails only when a revision cannot be resolved or the source itself
    /// breaks. Unreadable or unparsable files end up as warnings in the report.
    pub fn run(&self, base: &str, head: &str) -> Result<CheckReport> {
        info!(
            source = self.source.name(),
            base,
            head,
            scope = %self.scope,
            "Checking public methods"
        );

        let changed = match self.scope {
            FileScope::Tracked => None,
            FileScope::Changed => Some(
                self.source
                    .changed_files(base, head)?
                    .into_iter()
                    .collect::<BTreeSet<_>>(),
            ),
        };

        let base_revision = self.load(base, changed.as_ref())?;
        let head_revision = self.load(head, changed.as_ref())?;

        let mut access_warnings = base_revision.warnings;
        access_warnings.extend(head_revision.warnings);
        let report = self.compare(
            base,
            head,
            &base_revision.files,
            &head_revision.files,
            access_warnings,
        )?;

        info!(
            passed = report.passed(),
            changed_classes = report.summary.changed_classes,
            warnings = report.summary.file_warnings,
            "Check finished"
        );
        Ok(report)
    }

    /// Compare two in-memory file sets
    ///
    /// Warnings are tagged with the revision labels `base` and `head`.
    pub fn compare_files(
        &self,
        base: &str,
        head: &str,
        base_files: &[SourceFile],
        head_files: &[SourceFile],
    ) -> Result<CheckReport> {
        self.compare(base, head, base_files, head_files, Vec::new())
    }

    fn compare(
        &self,
        base: &str,
        head: &str,
        base_files: &[SourceFile],
        head_files: &[SourceFile],
        mut warnings: Vec<FileWarning>,
    ) -> Result<CheckReport> {
        let base_build = self.builder.build(base_files)?;
        let head_build = self.builder.build(head_files)?;

        let diffs = DiffEngine::compare(&base_build.snapshot, &head_build.snapshot);
        warnings.extend(tag_warnings(base_build.warnings, base));
        warnings.extend(tag_warnings(head_build.warnings, head));

        Ok(CheckReport::new(
            base,
            head,
            base_build.snapshot.len(),
            diffs,
            warnings,
        ))
    }

    /// Read the eligible files of a revision
    fn load(&self, revision: &str, changed: Option<&BTreeSet<String>>) -> Result<LoadedRevision> {
        let paths: Vec<String> = self
            .source
            .list_files(revision)?
            .into_iter()
            .filter(|path| changed.is_none_or(|changed| changed.contains(path)))
            .filter(|path| self.builder.is_eligible(path))
            .collect();

        let mut files = Vec::with_capacity(paths.len());
        let mut warnings = Vec::new();
        for path in paths {
            match self.source.read_file(revision, &path) {
                Ok(content) => files.push(SourceFile::new(path, content)),
                Err(e) => match FileWarning::from_error(&path, &e) {
                    Some(warning) => {
                        warn!(revision, path = %path, error = %e, "Cannot load file");
                        warnings.push(warning.at_revision(revision));
                    }
                    None => return Err(e),
                },
            }
        }

        info!(revision, files = files.len(), "Loaded revision");
        Ok(LoadedRevision { files, warnings })
    }
}

fn tag_warnings(warnings: Vec<FileWarning>, revision: &str) -> impl Iterator<Item = FileWarning> {
    warnings
        .into_iter()
        .map(move |warning| warning.at_revision(revision))
}
