//! Revision Source Port
//!
//! Access to the files of a revision (a commit, a branch, a directory). This
//! is the version-control collaborator of a comparison.

use crate::error::Result;

/// Read-only access to the files of named revisions
pub trait RevisionSource: Send + Sync {
    /// Short name of the backend, used in logs
    fn name(&self) -> &str;

    /// Paths of all files present at `revision`
    ///
    /// Fails when the revision itself cannot be resolved.
    fn list_files(&self, revision: &str) -> Result<Vec<String>>;

    /// Paths touched between `base` and `head`
    ///
    /// Includes files that exist at only one of the two revisions.
    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>>;

    /// Full text content of `path` at `revision`
    ///
    /// Unreadable files yield [`Error::FileAccess`](crate::Error::FileAccess).
    fn read_file(&self, revision: &str, path: &str) -> Result<String>;
}
