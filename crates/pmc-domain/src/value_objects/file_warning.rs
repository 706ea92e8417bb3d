//! Recoverable per-file failures

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of per-file failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileWarningKind {
    /// The file content could not be parsed
    Parse,
    /// The file content could not be fetched
    Access,
}

impl fmt::Display for FileWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "parse"),
            Self::Access => write!(f, "access"),
        }
    }
}

/// A file left out of a snapshot, with the reason
///
/// Warnings are collected next to the diff and never abort a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWarning {
    /// Revision the file belongs to, when known
    pub revision: Option<String>,

    /// Path of the affected file
    pub path: String,

    /// Failure kind
    pub kind: FileWarningKind,

    /// Human-readable reason
    pub message: String,
}

impl FileWarning {
    /// Create a parse warning
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            revision: None,
            path: path.into(),
            kind: FileWarningKind::Parse,
            message: message.into(),
        }
    }

    /// Create an access warning
    pub fn access(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            revision: None,
            path: path.into(),
            kind: FileWarningKind::Access,
            message: message.into(),
        }
    }

    /// Convert a recoverable error into a warning for `path`
    ///
    /// Returns `None` for errors that are not scoped to one file.
    pub fn from_error(path: &str, error: &Error) -> Option<Self> {
        match error {
            Error::FileParse {
                line,
                column,
                message,
                ..
            } => Some(Self::parse(
                path,
                format!("{message} (line {line}, column {column})"),
            )),
            Error::FileAccess { message, .. } => Some(Self::access(path, message.clone())),
            _ => None,
        }
    }

    /// Attach the revision the file was read from
    pub fn at_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(revision) => write!(
                f,
                "Cannot load file `{}` at revision `{}`: {}",
                self.path, revision, self.message
            ),
            None => write!(f, "Cannot load file `{}`: {}", self.path, self.message),
        }
    }
}
