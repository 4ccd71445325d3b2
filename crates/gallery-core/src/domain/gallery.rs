//! Gallery and image types as they are listed to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Replace every space with `%20`.
///
/// Only the `path`/`fullpath` fields are encoded this way; `name` fields
/// always carry the raw directory or file name.
pub fn encode_spaces(raw: &str) -> String {
    raw.replace(' ', "%20")
}

/// Display name of an image: the file name up to its first `.`.
///
/// `"cat.png"` becomes `"cat"`, `"a.b.png"` becomes `"a"` and a name without
/// any dot is returned unchanged.
pub fn image_name(file_name: &str) -> String {
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// A single image inside a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// File name inside the gallery directory.
    pub path: String,
    /// Encoded gallery path joined with the file name (`my%20pets/cat.png`).
    pub fullpath: String,
    /// File name without its extension.
    pub name: String,
    /// Last modification time of the file.
    pub modified: DateTime<Utc>,
}

impl Image {
    /// Build the listing entry for `file_name` stored in `gallery`.
    pub fn new(gallery: &str, file_name: &str, modified: DateTime<Utc>) -> Self {
        Self {
            path: file_name.to_string(),
            fullpath: format!("{}/{}", encode_spaces(gallery), file_name),
            name: image_name(file_name),
            modified,
        }
    }
}

/// A gallery together with all of its images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// Directory name.
    pub name: String,
    /// Space-encoded directory name.
    pub path: String,
    /// Images in file name order.
    pub images: Vec<Image>,
}

/// Name and encoded path of a gallery, without its images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRef {
    pub name: String,
    pub path: String,
}

impl GalleryRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: encode_spaces(name),
        }
    }
}

/// Response shape of a single-gallery lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryDetail {
    pub gallery: GalleryRef,
    pub images: Vec<Image>,
}

/// What a delete request removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deleted {
    /// A directory and everything below it.
    Gallery,
    /// A single file.
    Image,
}

impl Deleted {
    /// Confirmation message returned to the client.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery successfully deleted.",
            Self::Image => "Image successfully deleted.",
        }
    }
}
