//! Error types for schema collection

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, CollectError>;

/// Every step of a collection pass that can fail.
///
/// All variants are fatal to the current pass; the first one encountered
/// aborts it.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("failed to resolve search root {path:?}: {source}")]
    RootResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("search root is not a directory: {0:?}")]
    RootNotDirectory(PathBuf),

    #[error("error creating destination directory {path:?}: {source}")]
    DestinationDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create destination file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {from:?} to {to:?}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file name is not valid UTF-8: {0:?}")]
    NonUtf8Name(PathBuf),

    #[error("error walking directories: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("destination {path:?} already exists with different content (expected {expected}, found {actual})")]
    ContentMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}
