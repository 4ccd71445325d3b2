//! Validated locations inside the galleries root.
//!
//! Every path parameter that reaches the filesystem goes through
//! [`GalleryPath`]. A segment must be a single normal path component, so a
//! `GalleryPath` can never name anything outside the root lexically. The
//! filesystem adapter additionally checks the canonical location, which
//! catches symlinks pointing elsewhere.

use std::fmt;
use std::path::PathBuf;

use crate::paths::PathError;

/// Check that `segment` is a single, normal path component.
fn validate_segment(segment: &str) -> Result<&str, PathError> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);

    if invalid {
        Err(PathError::InvalidSegment(segment.to_string()))
    } else {
        Ok(segment)
    }
}

/// A location relative to the galleries root: the root itself, a gallery
/// directory, or an entry inside a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GalleryPath {
    segments: Vec<String>,
}

impl GalleryPath {
    /// The galleries root.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// A gallery directory directly below the root.
    pub fn gallery(name: &str) -> Result<Self, PathError> {
        Ok(Self {
            segments: vec![validate_segment(name)?.to_string()],
        })
    }

    /// An entry (usually an image) inside a gallery.
    pub fn item(gallery: &str, item: &str) -> Result<Self, PathError> {
        Ok(Self {
            segments: vec![
                validate_segment(gallery)?.to_string(),
                validate_segment(item)?.to_string(),
            ],
        })
    }

    /// Whether this is the galleries root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The validated segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path relative to the galleries root.
    pub fn to_relative(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl fmt::Display for GalleryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}
