//! Filesystem gateway port.
//!
//! The store is the only way services touch the disk. Calls are synchronous
//! and are made in request order: existence checks, then at most one
//! mutation, then the response is built.

use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::GalleryPath;

/// Errors returned by a [`GalleryStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The path resolves outside the galleries root (e.g. through a symlink).
    #[error("Path escapes the galleries root: {0}")]
    OutsideRoot(String),

    /// Any other I/O failure.
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A listed directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// File or directory name.
    pub name: String,
    pub kind: EntryKind,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

/// Port for all filesystem access below the galleries root.
///
/// Implementations must resolve every [`GalleryPath`] against their root and
/// refuse any path whose resolved location leaves it.
pub trait GalleryStore: Send + Sync {
    /// Kind of the entry at `path`, or `None` if nothing exists there.
    fn kind(&self, path: &GalleryPath) -> Result<Option<EntryKind>, StoreError>;

    /// Entries of the directory at `path`, sorted by name.
    fn list(&self, path: &GalleryPath) -> Result<Vec<EntryInfo>, StoreError>;

    /// Last modification time of the entry at `path`.
    fn modified(&self, path: &GalleryPath) -> Result<DateTime<Utc>, StoreError>;

    /// Create a single directory. Fails with `AlreadyExists` if it exists.
    fn create_dir(&self, path: &GalleryPath) -> Result<(), StoreError>;

    /// Delete a directory and everything below it.
    fn remove_dir_all(&self, path: &GalleryPath) -> Result<(), StoreError>;

    /// Delete a single file.
    fn remove_file(&self, path: &GalleryPath) -> Result<(), StoreError>;

    /// Move a staged file (outside the store) to `dest`, replacing any file there.
    fn persist(&self, staged: &Path, dest: &GalleryPath) -> Result<(), StoreError>;

    /// Read the whole file at `path`.
    fn read(&self, path: &GalleryPath) -> Result<Vec<u8>, StoreError>;
}
