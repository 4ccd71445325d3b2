//! In-memory test doubles for the store and resizer ports.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Dimensions, GalleryPath};
use crate::ports::{
    EntryInfo, EntryKind, GalleryStore, ImageError, ImageResizer, ResizedImage, StoreError,
};

struct Node {
    kind: EntryKind,
    data: Vec<u8>,
}

/// A `GalleryStore` over a sorted map of `/`-joined paths.
pub struct MemoryStore {
    nodes: Mutex<BTreeMap<String, Node>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn add_dir(&self, path: &str) {
        self.insert(path, EntryKind::Directory, Vec::new());
    }

    pub fn add_file(&self, path: &str, data: &[u8]) {
        self.insert(path, EntryKind::File, data.to_vec());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.lock().unwrap().contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.lock().unwrap().is_empty()
    }

    pub fn data(&self, path: &str) -> Option<Vec<u8>> {
        self.nodes.lock().unwrap().get(path).map(|n| n.data.clone())
    }

    fn insert(&self, path: &str, kind: EntryKind, data: Vec<u8>) {
        self.nodes
            .lock()
            .unwrap()
            .insert(path.to_string(), Node { kind, data });
    }

    fn modified_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }
}

impl GalleryStore for MemoryStore {
    fn kind(&self, path: &GalleryPath) -> Result<Option<EntryKind>, StoreError> {
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .get(&path.to_string())
            .map(|n| n.kind))
    }

    fn list(&self, path: &GalleryPath) -> Result<Vec<EntryInfo>, StoreError> {
        let prefix = if path.is_root() {
            String::new()
        } else {
            format!("{path}/")
        };
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(key, node)| {
                let name = key.strip_prefix(&prefix)?;
                (!name.contains('/')).then(|| EntryInfo {
                    name: name.to_string(),
                    kind: node.kind,
                    modified: Self::modified_at(),
                })
            })
            .collect())
    }

    fn modified(&self, path: &GalleryPath) -> Result<DateTime<Utc>, StoreError> {
        if self.contains(&path.to_string()) {
            Ok(Self::modified_at())
        } else {
            Err(StoreError::NotFound(path.to_string()))
        }
    }

    fn create_dir(&self, path: &GalleryPath) -> Result<(), StoreError> {
        if self.contains(&path.to_string()) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.add_dir(&path.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &GalleryPath) -> Result<(), StoreError> {
        let key = path.to_string();
        let nested = format!("{key}/");
        self.nodes
            .lock()
            .unwrap()
            .retain(|k, _| k != &key && !k.starts_with(&nested));
        Ok(())
    }

    fn remove_file(&self, path: &GalleryPath) -> Result<(), StoreError> {
        self.nodes
            .lock()
            .unwrap()
            .remove(&path.to_string())
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn persist(&self, staged: &Path, dest: &GalleryPath) -> Result<(), StoreError> {
        let data = std::fs::read(staged).map_err(|e| StoreError::Io {
            path: staged.display().to_string(),
            reason: e.to_string(),
        })?;
        self.add_file(&dest.to_string(), &data);
        Ok(())
    }

    fn read(&self, path: &GalleryPath) -> Result<Vec<u8>, StoreError> {
        self.data(&path.to_string())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}

/// An `ImageResizer` that treats the bytes `b"WxH"` as an image of that size.
///
/// Anything else fails to decode. Resizing "encodes" the target size the
/// same way, so results can be probed again.
pub struct FakeResizer;

impl ImageResizer for FakeResizer {
    fn probe(&self, bytes: &[u8]) -> Result<Dimensions, ImageError> {
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.parse::<Dimensions>().ok())
            .filter(|dims| dims.width > 0 && dims.height > 0)
            .ok_or_else(|| ImageError::Decode("not a fake image".to_string()))
    }

    fn resize(&self, bytes: &[u8], target: Dimensions) -> Result<ResizedImage, ImageError> {
        self.probe(bytes)?;
        Ok(ResizedImage {
            bytes: target.to_string().into_bytes(),
            content_type: "image/x-fake".to_string(),
            dimensions: target,
        })
    }
}
