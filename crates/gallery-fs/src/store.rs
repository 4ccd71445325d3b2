//! `LocalGalleryStore` - `std::fs` behind the `GalleryStore` port.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gallery_core::{EntryInfo, EntryKind, GalleryPath, GalleryStore, StoreError};
use tracing::{debug, warn};

/// Map an I/O error on `label` to a store error.
///
/// Errors carry the path relative to the root, never the absolute location.
fn io_error(label: &impl ToString, err: &io::Error) -> StoreError {
    match err.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(label.to_string()),
        io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(label.to_string()),
        _ => StoreError::Io {
            path: label.to_string(),
            reason: err.to_string(),
        },
    }
}

fn entry_kind(metadata: &Metadata) -> EntryKind {
    if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

/// Gallery store over a directory tree on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalGalleryStore {
    root: PathBuf,
}

impl LocalGalleryStore {
    /// Open a store over an existing directory.
    ///
    /// The root is canonicalized once; every later path is checked against it.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();
        let label = root.display();
        let canonical = root.canonicalize().map_err(|e| io_error(&label, &e))?;
        if !canonical.is_dir() {
            return Err(StoreError::Io {
                path: label.to_string(),
                reason: "not a directory".to_string(),
            });
        }

        debug!(root = %canonical.display(), "Opened gallery store");
        Ok(Self { root: canonical })
    }

    /// The canonical galleries root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of `path`, after checking it stays inside the root.
    ///
    /// An existing entry is checked by its canonical location (following
    /// symlinks). A missing entry is checked through its parent directory,
    /// which must exist.
    fn resolve(&self, path: &GalleryPath) -> Result<PathBuf, StoreError> {
        let full = self.root.join(path.to_relative());
        let anchor = if fs::symlink_metadata(&full).is_ok() {
            full.canonicalize()
        } else {
            full.parent().unwrap_or(self.root.as_path()).canonicalize()
        };

        match anchor {
            Ok(resolved) if resolved.starts_with(&self.root) => Ok(full),
            Ok(resolved) => {
                warn!(
                    path = %path,
                    resolved = %resolved.display(),
                    "Refusing path outside the galleries root"
                );
                Err(StoreError::OutsideRoot(path.to_string()))
            }
            Err(e) => Err(io_error(path, &e)),
        }
    }
}

impl GalleryStore for LocalGalleryStore {
    fn kind(&self, path: &GalleryPath) -> Result<Option<EntryKind>, StoreError> {
        let full = match self.resolve(path) {
            Ok(full) => full,
            Err(StoreError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        match fs::metadata(&full) {
            Ok(metadata) => Ok(Some(entry_kind(&metadata))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(path, &e)),
        }
    }

    fn list(&self, path: &GalleryPath) -> Result<Vec<EntryInfo>, StoreError> {
        let full = self.resolve(path)?;
        let mut entries = Vec::new();

        for entry in fs::read_dir(&full).map_err(|e| io_error(path, &e))? {
            let entry = entry.map_err(|e| io_error(path, &e))?;
            let Ok(name) = entry.file_name().into_string() else {
                warn!(dir = %path, "Skipping entry with a non UTF-8 name");
                continue;
            };
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(dir = %path, entry = %name, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            let modified = metadata.modified().map_err(|e| io_error(path, &e))?;

            entries.push(EntryInfo {
                kind: entry_kind(&metadata),
                modified: DateTime::<Utc>::from(modified),
                name,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn modified(&self, path: &GalleryPath) -> Result<DateTime<Utc>, StoreError> {
        let full = self.resolve(path)?;
        let modified = fs::metadata(&full)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| io_error(path, &e))?;
        Ok(DateTime::<Utc>::from(modified))
    }

    fn create_dir(&self, path: &GalleryPath) -> Result<(), StoreError> {
        let full = self.resolve(path)?;
        fs::create_dir(&full).map_err(|e| io_error(path, &e))
    }

    fn remove_dir_all(&self, path: &GalleryPath) -> Result<(), StoreError> {
        let full = self.resolve(path)?;
        fs::remove_dir_all(&full).map_err(|e| io_error(path, &e))
    }

    fn remove_file(&self, path: &GalleryPath) -> Result<(), StoreError> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).map_err(|e| io_error(path, &e))
    }

    fn persist(&self, staged: &Path, dest: &GalleryPath) -> Result<(), StoreError> {
        let full = self.resolve(dest)?;

        match fs::rename(staged, &full) {
            Ok(()) => Ok(()),
            // Staging area on another filesystem: copy, then drop the staged file
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                fs::copy(staged, &full).map_err(|e| io_error(dest, &e))?;
                if let Err(e) = fs::remove_file(staged) {
                    warn!(staged = %staged.display(), error = %e, "Failed to remove staged upload");
                }
                Ok(())
            }
            Err(e) => Err(io_error(dest, &e)),
        }
    }

    fn read(&self, path: &GalleryPath) -> Result<Vec<u8>, StoreError> {
        let full = self.resolve(path)?;
        fs::read(&full).map_err(|e| io_error(path, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalGalleryStore) {
        let temp = TempDir::new().unwrap();
        let store = LocalGalleryStore::open(temp.path()).unwrap();
        (temp, store)
    }

    fn gallery(name: &str) -> GalleryPath {
        GalleryPath::gallery(name).unwrap()
    }

    fn item(gallery: &str, item: &str) -> GalleryPath {
        GalleryPath::item(gallery, item).unwrap()
    }

    #[test]
    fn test_open_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = LocalGalleryStore::open(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_kind_reports_dirs_files_and_missing() {
        let (temp, store) = store();
        fs::create_dir(temp.path().join("pets")).unwrap();
        fs::write(temp.path().join("pets").join("cat.png"), b"png").unwrap();

        assert_eq!(store.kind(&gallery("pets")).unwrap(), Some(EntryKind::Directory));
        assert_eq!(store.kind(&item("pets", "cat.png")).unwrap(), Some(EntryKind::File));
        assert_eq!(store.kind(&gallery("missing")).unwrap(), None);
        assert_eq!(store.kind(&item("missing", "cat.png")).unwrap(), None);
    }

    #[test]
    fn test_list_is_sorted_and_typed() {
        let (temp, store) = store();
        fs::create_dir(temp.path().join("zoo")).unwrap();
        fs::create_dir(temp.path().join("art")).unwrap();
        fs::write(temp.path().join("notes.txt"), b"x").unwrap();

        let entries = store.list(&GalleryPath::root()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["art", "notes.txt", "zoo"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].kind, EntryKind::File);
    }

    #[test]
    fn test_create_dir_twice_conflicts() {
        let (temp, store) = store();
        store.create_dir(&gallery("pets")).unwrap();
        assert!(temp.path().join("pets").is_dir());

        let err = store.create_dir(&gallery("pets")).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[test]
    fn test_persist_moves_staged_file() {
        let (temp, store) = store();
        store.create_dir(&gallery("pets")).unwrap();
        let staged = temp.path().join("upload.tmp");
        fs::write(&staged, b"cat").unwrap();

        store.persist(&staged, &item("pets", "cat.png")).unwrap();

        assert!(!staged.exists());
        assert_eq!(store.read(&item("pets", "cat.png")).unwrap(), b"cat");
        assert!(store.modified(&item("pets", "cat.png")).is_ok());
    }

    #[test]
    fn test_remove_file_and_dir() {
        let (temp, store) = store();
        fs::create_dir_all(temp.path().join("pets").join("nested")).unwrap();
        fs::write(temp.path().join("pets").join("cat.png"), b"png").unwrap();

        store.remove_file(&item("pets", "cat.png")).unwrap();
        assert!(!temp.path().join("pets").join("cat.png").exists());

        store.remove_dir_all(&gallery("pets")).unwrap();
        assert!(!temp.path().join("pets").exists());
    }

    #[test]
    fn test_errors_use_relative_paths() {
        let (_temp, store) = store();
        match store.read(&item("pets", "cat.png")).unwrap_err() {
            StoreError::NotFound(path) => assert_eq!(path, "pets/cat.png"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_is_refused() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), b"secret").unwrap();

        let (temp, store) = store();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();

        let err = store.read(&item("link", "secret.txt")).unwrap_err();
        assert!(matches!(err, StoreError::OutsideRoot(_)));

        let err = store.remove_dir_all(&gallery("link")).unwrap_err();
        assert!(matches!(err, StoreError::OutsideRoot(_)));
        assert!(outside.path().join("secret.txt").exists());
    }
}
