//! Core domain for the gallery server.
//!
//! Galleries are directories under a single galleries root and images are
//! the files inside them. This crate holds the domain types, the ports the
//! adapters implement (`GalleryStore` for the filesystem, `ImageResizer` for
//! pixel work), and the services that carry the request logic.
//!
//! Adapters:
//! - `gallery-fs` implements [`GalleryStore`] over the local filesystem
//! - `gallery-image` implements [`ImageResizer`] with the `image` crate
//! - `gallery-axum` exposes [`GalleryCore`] over HTTP

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    Deleted, Dimensions, Gallery, GalleryDetail, GalleryPath, GalleryRef, Image, ResizeLimits,
    encode_spaces, image_name, infer_dimensions,
};
pub use ports::{
    CoreError, EntryInfo, EntryKind, GalleryStore, ImageError, ImageResizer, ResizedImage,
    StoreError,
};
pub use services::{GalleryCore, GalleryService, ImageService, StagedUpload};

// Re-export path utilities
pub use paths::{
    DEFAULT_GALLERIES_DIR, DirectoryCreationStrategy, GalleriesDirResolution, GalleriesDirSource,
    PathError, ensure_directory, resolve_galleries_dir, verify_writable,
};
