//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for PMC
#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be parsed into declarations
    #[error("Parse error in {path} at line {line}, column {column}: {message}")]
    FileParse {
        /// Path of the file that failed to parse
        path: String,
        /// 1-based line of the first syntax problem
        line: usize,
        /// 1-based column of the first syntax problem
        column: usize,
        /// Description of the problem
        message: String,
    },

    /// A source file could not be read from its revision
    #[error("Cannot access {path}: {message}")]
    FileAccess {
        /// Path of the file that could not be read
        path: String,
        /// Description of the access failure
        message: String,
    },

    /// A revision identifier could not be resolved
    #[error("Cannot resolve revision `{revision}`: {message}")]
    Revision {
        /// The revision as given by the caller
        revision: String,
        /// Description of the failure
        message: String,
    },

    /// Version control repository error
    #[error("Repository error: {message}")]
    Repository {
        /// Description of the repository error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Per-file error creation methods
impl Error {
    /// Create a parse error for a file
    pub fn file_parse<P: Into<String>, S: Into<String>>(
        path: P,
        line: usize,
        column: usize,
        message: S,
    ) -> Self {
        Self::FileParse {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an access error for a file
    pub fn file_access<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for failures scoped to a single file.
    ///
    /// Such failures become warnings and never abort a snapshot build.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileParse { .. } | Self::FileAccess { .. })
    }
}

// Version control error creation methods
impl Error {
    /// Create a revision resolution error
    pub fn revision<R: Into<String>, S: Into<String>>(revision: R, message: S) -> Self {
        Self::Revision {
            revision: revision.into(),
            message: message.into(),
        }
    }

    /// Create a repository error
    pub fn repository<S: Into<String>>(message: S) -> Self {
        Self::Repository {
            message: message.into(),
            source: None,
        }
    }

    /// Create a repository error with source
    pub fn repository_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Repository {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
