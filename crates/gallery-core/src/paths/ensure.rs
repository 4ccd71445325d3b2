//! Making sure the galleries root (and the upload staging directory) exist
//! and can be written before the server starts.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::error::PathError;

/// What [`ensure_directory`] does when the directory is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// `mkdir -p` it.
    #[default]
    AutoCreate,
    /// Fail with [`PathError::DirectoryNotFound`].
    Disallow,
}

/// Check that `path` is a writable directory, creating it first if allowed.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Err(PathError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if strategy == DirectoryCreationStrategy::Disallow {
                return Err(PathError::DirectoryNotFound(path.to_path_buf()));
            }
            fs::create_dir_all(path).map_err(|source| PathError::CreateFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Err(source) => {
            return Err(PathError::NotWritable {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(".gallery_write_test");
    let not_writable = |source: io::Error| PathError::NotWritable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe)
        .map_err(not_writable)?;
    file.write_all(b"test").map_err(not_writable)?;
    drop(file);
    let _ = fs::remove_file(&probe);
    Ok(())
}
