//! Local filesystem implementation of the gallery store.
//!
//! [`LocalGalleryStore`] maps every [`GalleryPath`](gallery_core::GalleryPath)
//! onto a directory tree under a single root and refuses any path whose
//! canonical location leaves that root.

#![deny(unused_crate_dependencies)]

mod store;

pub use store::LocalGalleryStore;

// Re-export the port for convenience
pub use gallery_core::{GalleryStore, StoreError};
