//! Error type shared by every stage of table generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;

/// Table generation and verification errors
#[derive(Debug, Error)]
pub enum TableError {
    /// Token would not resolve to a single file inside the tables directory
    #[error("specified token is not available: {0:?} (use a single path segment without '../')")]
    InvalidToken(String),

    /// Tables directory grants access to group or other
    #[error(
        "hash tables dir is too open: {} has mode {mode:04o} (should be accessible only by owner)",
        path.display()
    )]
    InsecureDirectory { path: PathBuf, mode: u32 },

    /// Tables directory does not exist
    #[error("hash tables dir not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Tables directory exists but is something else
    #[error("hash tables dir is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Tables directory could not be inspected
    #[error("failed to inspect {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Algorithm name is not in the registry
    #[error("specified algorithm is not available: {0:?}")]
    UnknownAlgorithm(String),

    /// Count is not a non-negative integer
    #[error("invalid hash count: {0:?} (expected a non-negative integer)")]
    InvalidCount(String),

    /// Terminal echo could not be controlled
    #[error("failed to control terminal echo: {0}")]
    Terminal(#[source] io::Error),

    /// Hashing primitive rejected the input or returned an unexpected layout
    #[error("failed to hash password: {0}")]
    Hashing(String),

    /// Line in a table file is not a `$id$salt$hash` record
    #[error("malformed hash record on line {line}")]
    MalformedRecord { line: usize },

    /// I/O error while reading the secret or writing the table
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
