//! Git revision source
//!
//! Reads files straight from commit trees with libgit2. The working tree is
//! never touched, so base and head can be any commits of the repository.

use git2::{ObjectType, Repository, Tree, TreeWalkMode, TreeWalkResult};
use pmc_domain::RevisionSource;
use pmc_domain::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Revision source over the commits of a git repository
///
/// # Example
///
/// ```ignore
/// use pmc_providers::GitRevisionSource;
/// use pmc_domain::RevisionSource;
///
/// let source = GitRevisionSource::open(".")?;
/// let files = source.list_files("HEAD~1")?;
/// let content = source.read_file("HEAD", "lib/foo.rb")?;
/// ```
pub struct GitRevisionSource {
    /// Git repository (libgit2 handles are not `Sync`)
    repo: Mutex<Repository>,

    /// Directory the repository was discovered from
    path: PathBuf,
}

impl GitRevisionSource {
    /// Open the repository containing `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            Error::repository_with_source(
                format!("Failed to open repository at {}", path.display()),
                e,
            )
        })?;

        Ok(Self {
            repo: Mutex::new(repo),
            path: path.to_path_buf(),
        })
    }

    /// Path the repository was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Repository) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| Error::internal("Git repository lock poisoned"))?;
        f(&repo)
    }
}

/// Resolve a commit reference (branch name, SHA, HEAD~n, etc.) to its tree
fn resolve_tree<'r>(repo: &'r Repository, revision: &str) -> Result<Tree<'r>> {
    let object = repo
        .revparse_single(revision)
        .map_err(|e| Error::revision(revision, e.message()))?;
    let commit = object
        .peel_to_commit()
        .map_err(|e| Error::revision(revision, format!("not a commit: {}", e.message())))?;
    commit
        .tree()
        .map_err(|e| Error::revision(revision, format!("failed to read tree: {}", e.message())))
}

impl RevisionSource for GitRevisionSource {
    fn name(&self) -> &str {
        "git"
    }

    fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let tree = resolve_tree(repo, revision)?;
            let mut paths = Vec::new();

            tree.walk(TreeWalkMode::PreOrder, |root, entry| {
                if entry.kind() == Some(ObjectType::Blob) {
                    if let Some(name) = entry.name() {
                        paths.push(format!("{root}{name}"));
                    }
                }
                TreeWalkResult::Ok
            })
            .map_err(|e| Error::repository_with_source("Failed to walk commit tree", e))?;

            debug!(revision, files = paths.len(), "Listed files from git tree");
            Ok(paths)
        })
    }

    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let base_tree = resolve_tree(repo, base)?;
            let head_tree = resolve_tree(repo, head)?;
            let diff = repo
                .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
                .map_err(|e| Error::repository_with_source("Failed to compute diff", e))?;

            let mut paths = BTreeSet::new();
            for delta in diff.deltas() {
                for file in [delta.old_file(), delta.new_file()] {
                    if let Some(path) = file.path().and_then(Path::to_str) {
                        paths.insert(path.to_string());
                    }
                }
            }

            debug!(base, head, files = paths.len(), "Listed changed files");
            Ok(paths.into_iter().collect())
        })
    }

    fn read_file(&self, revision: &str, path: &str) -> Result<String> {
        self.with_repo(|repo| {
            let tree = resolve_tree(repo, revision)?;
            let entry = tree
                .get_path(Path::new(path))
                .map_err(|e| Error::file_access(path, e.message()))?;
            let blob = repo
                .find_blob(entry.id())
                .map_err(|e| Error::file_access(path, e.message()))?;

            if blob.is_binary() {
                return Err(Error::file_access(path, "binary content"));
            }

            String::from_utf8(blob.content().to_vec())
                .map_err(|e| Error::file_access(path, format!("not valid UTF-8: {e}")))
        })
    }
}
