//! Errors from preparing the galleries root and validating path segments.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but the home directory is unknown.
    #[error("cannot expand `~`: no home directory")]
    NoHomeDir,

    #[error("galleries path is empty")]
    EmptyPath,

    /// Relative path given while the working directory is unreadable.
    #[error("cannot read the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Missing directory with auto-creation disabled.
    #[error("{} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("cannot create {}: {source}", path.display())]
    CreateFailed { path: PathBuf, source: io::Error },

    /// The write probe could not be created.
    #[error("{} is not writable: {source}", path.display())]
    NotWritable { path: PathBuf, source: io::Error },

    /// A gallery or file name that is not exactly one normal path component.
    #[error("invalid path segment {0:?}")]
    InvalidSegment(String),
}
