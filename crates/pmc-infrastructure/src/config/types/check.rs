//! Check configuration types

use crate::constants::{DEFAULT_BASE_REVISION, DEFAULT_HEAD_REVISION, DEFAULT_REPOSITORY_PATH};
use pmc_application::ReportFormat;
use pmc_domain::FileScope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where revisions are read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Commits of a git repository
    #[default]
    Git,
    /// Directories on disk, one per revision
    Directory,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git => write!(f, "git"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "directory" | "dir" => Ok(Self::Directory),
            other => Err(format!("Unknown source: {other}. Use git or directory")),
        }
    }
}

/// What to compare and how to report it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Revision backend
    pub source: SourceKind,

    /// Repository path, or the root relative directory revisions resolve against
    pub repository: PathBuf,

    /// Base revision
    pub base: String,

    /// Head revision
    pub head: String,

    /// Which files take part in the comparison
    pub scope: FileScope,

    /// Report output format
    pub format: ReportFormat,

    /// Size of the extraction worker pool (rayon's global pool when unset)
    pub workers: Option<usize>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            repository: PathBuf::from(DEFAULT_REPOSITORY_PATH),
            base: DEFAULT_BASE_REVISION.to_string(),
            head: DEFAULT_HEAD_REVISION.to_string(),
            scope: FileScope::default(),
            format: ReportFormat::default(),
            workers: None,
        }
    }
}
