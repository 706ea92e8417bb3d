//! Snapshot Builder
//!
//! Runs a [`SymbolExtractor`] over every eligible file of a revision and
//! merges the per-file tables into one [`Snapshot`].
//!
//! Extraction is fanned out with rayon. Results are collected in input order
//! before merging, so the snapshot does not depend on thread scheduling.

use globset::{Glob, GlobSet, GlobSetBuilder};
use pmc_domain::error::{Error, Result};
use pmc_domain::{
    ClassSymbol, Exclusions, FileSymbols, FileWarning, Snapshot, SourceFile, SymbolExtractor,
};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Characters that turn an ignored-files entry into a glob pattern
const GLOB_METACHARACTERS: &[char] = &['*', '?', '[', '{'];

/// Result of building one snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuild {
    /// Merged class map
    pub snapshot: Snapshot,

    /// Files that were skipped because they failed to parse or load
    pub warnings: Vec<FileWarning>,

    /// Number of files handed to the extractor
    pub files_extracted: usize,
}

/// Outcome of extracting a single file
enum FileOutcome {
    Skipped,
    Extracted(FileSymbols),
    Failed(FileWarning),
}

/// Builds snapshots under a fixed set of exclusions
///
/// # Example
///
/// ```ignore
/// use pmc_application::SnapshotBuilder;
/// use pmc_domain::{Exclusions, SourceFile};
///
/// let builder = SnapshotBuilder::new(extractor, Exclusions::default())?;
/// let build = builder.build(&[SourceFile::new("lib/foo.rb", "class Foo\nend\n")])?;
/// assert!(build.snapshot.contains("Foo"));
/// ```
pub struct SnapshotBuilder {
    extractor: Arc<dyn SymbolExtractor>,
    exclusions: Exclusions,
    ignored_globs: GlobSet,
    pool: Option<rayon::ThreadPool>,
}

impl SnapshotBuilder {
    /// Create a builder
    ///
    /// Fails when an ignored-files entry is not a valid glob pattern.
    pub fn new(extractor: Arc<dyn SymbolExtractor>, exclusions: Exclusions) -> Result<Self> {
        let ignored_globs = compile_globs(&exclusions)?;
        Ok(Self {
            extractor,
            exclusions,
            ignored_globs,
            pool: None,
        })
    }

    /// Run extraction on a dedicated pool of `workers` threads
    ///
    /// Without this, rayon's global pool is used.
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("pmc-extract-{index}"))
            .build()
            .map_err(|e| {
                Error::configuration_with_source("Failed to build extraction worker pool", e)
            })?;
        self.pool = Some(pool);
        Ok(self)
    }

    /// Exclusions applied by this builder
    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// True if the file at `path` takes part in a snapshot
    ///
    /// A file is eligible when the extractor handles its extension and it is
    /// neither listed verbatim nor matched by a glob in the ignored files.
    pub fn is_eligible(&self, path: &str) -> bool {
        self.extractor.handles(path)
            && !self.exclusions.is_file_listed(path)
            && !self.ignored_globs.is_match(path)
    }

    /// Build a snapshot from the files of one revision
    ///
    /// Per-file parse and access failures become warnings. Any other error
    /// aborts the build.
    pub fn build(&self, files: &[SourceFile]) -> Result<SnapshotBuild> {
        let outcomes = match &self.pool {
            Some(pool) => pool.install(|| self.extract_all(files)),
            None => self.extract_all(files),
        };

        let mut extracted = Vec::new();
        let mut warnings = Vec::new();
        for outcome in outcomes {
            match outcome? {
                FileOutcome::Skipped => {}
                FileOutcome::Extracted(symbols) => extracted.push(symbols),
                FileOutcome::Failed(warning) => warnings.push(warning),
            }
        }

        let files_extracted = extracted.len() + warnings.len();
        let snapshot = self.merge(extracted);
        info!(
            files = files_extracted,
            classes = snapshot.len(),
            methods = snapshot.method_count(),
            warnings = warnings.len(),
            "Snapshot built"
        );

        Ok(SnapshotBuild {
            snapshot,
            warnings,
            files_extracted,
        })
    }

    fn extract_all(&self, files: &[SourceFile]) -> Vec<Result<FileOutcome>> {
        files.par_iter().map(|file| self.extract_one(file)).collect()
    }

    fn extract_one(&self, file: &SourceFile) -> Result<FileOutcome> {
        if !self.is_eligible(&file.path) {
            debug!(path = %file.path, "Skipping file");
            return Ok(FileOutcome::Skipped);
        }

        match self.extractor.extract(file, &self.exclusions.methods) {
            Ok(symbols) => Ok(FileOutcome::Extracted(symbols)),
            Err(e) => match FileWarning::from_error(&file.path, &e) {
                Some(warning) => {
                    warn!(path = %file.path, error = %e, "File left out of snapshot");
                    Ok(FileOutcome::Failed(warning))
                }
                None => Err(e),
            },
        }
    }

    /// Union per-file tables into one snapshot, in file order
    fn merge(&self, extracted: Vec<FileSymbols>) -> Snapshot {
        let exclusions = &self.exclusions;
        Snapshot::from_symbols(
            extracted
                .into_iter()
                .flat_map(|symbols| symbols.classes)
                .filter(|(class_name, _)| !exclusions.is_class_ignored(class_name))
                .map(|(class_name, methods)| {
                    ClassSymbol::with_methods(
                        class_name,
                        methods
                            .into_iter()
                            .filter(|method| !exclusions.is_method_ignored(method)),
                    )
                }),
        )
    }
}

fn compile_globs(exclusions: &Exclusions) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in exclusions
        .files
        .iter()
        .filter(|entry| entry.contains(GLOB_METACHARACTERS))
    {
        let glob = Glob::new(pattern).map_err(|e| {
            Error::configuration_with_source(format!("Invalid ignored file pattern `{pattern}`"), e)
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::configuration_with_source("Failed to compile ignored file patterns", e))
}
