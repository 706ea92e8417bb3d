//! Directory revision source
//!
//! Treats a directory on disk as a revision. Handy for comparing two
//! checkouts side by side without a repository.

use pmc_domain::RevisionSource;
use pmc_domain::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Revision source where each revision is a directory
///
/// Relative revision paths are resolved against the configured root.
/// Version control metadata directories are skipped.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRevisionSource {
    root: Option<PathBuf>,
}

impl DirectoryRevisionSource {
    /// Create a source resolving revisions against the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative revision paths against `root`
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn resolve(&self, revision: &str) -> Result<PathBuf> {
        let path = Path::new(revision);
        let dir = match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        };

        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(Error::revision(revision, "not a directory"))
        }
    }
}

/// Relative path with `/` separators, independent of the host platform
fn relative_path(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn is_vcs_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && matches!(entry.file_name().to_str(), Some(".git" | ".hg" | ".svn"))
}

impl RevisionSource for DirectoryRevisionSource {
    fn name(&self) -> &str {
        "directory"
    }

    fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        let dir = self.resolve(revision)?;

        let paths: Vec<String> = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_vcs_dir(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| relative_path(&dir, e.path()))
            .collect();

        debug!(revision, files = paths.len(), "Listed files from directory");
        Ok(paths)
    }

    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base_dir = self.resolve(base)?;
        let head_dir = self.resolve(head)?;

        let candidates: BTreeSet<String> = self
            .list_files(base)?
            .into_iter()
            .chain(self.list_files(head)?)
            .collect();

        Ok(candidates
            .into_iter()
            .filter(|path| fs::read(base_dir.join(path)).ok() != fs::read(head_dir.join(path)).ok())
            .collect())
    }

    fn read_file(&self, revision: &str, path: &str) -> Result<String> {
        let dir = self.resolve(revision)?;
        fs::read_to_string(dir.join(path)).map_err(|e| Error::file_access(path, e.to_string()))
    }
}
