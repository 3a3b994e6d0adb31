//! Error types for loading chart data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering or reading series files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected at least {expected} fields, found {found}", .path.display())]
    MissingField {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: invalid number {value:?}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("{}:{line}: coordinate {value:?} is not finite", .path.display())]
    NonFinite {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no series files found in {}", .0.display())]
    NoSeries(PathBuf),
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
