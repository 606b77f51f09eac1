//! Unified error types for ccfilter
//!
//! Every failure aborts the run. Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong command-line arguments
    #[error("{0}")]
    Usage(String),

    /// A path could not be read or written
    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The clang-tidy config has no usable comment line
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The compilation database is not what we expect
    #[error("Malformed compilation database: {0}")]
    Database(#[from] DatabaseError),
}

impl AppError {
    /// Wrap an IO error with the path it happened on
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Errors from reading the ignore list out of the clang-tidy config
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No line starts with the comment marker
    #[error("no line starting with '{marker}' found in {path}")]
    MissingCommentLine { path: String, marker: char },
}

/// Errors from parsing the compilation database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Content is not JSON at all
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level value is something other than an array
    #[error("expected a JSON array at the top level, found {0}")]
    NotAnArray(&'static str),

    /// An element of the array is not an object
    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// An entry lacks a string `file` field
    #[error("entry {index} has no string \"file\" field")]
    MissingFile { index: usize },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
