//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `GalleryCore`.

pub mod galleries;
pub mod images;
