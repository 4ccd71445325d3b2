//! Core services - the application's request logic.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations; adapters construct them
//! with a [`GalleryStore`](crate::ports::GalleryStore) and an
//! [`ImageResizer`](crate::ports::ImageResizer).

mod app_core;
mod gallery_service;
mod image_service;

#[cfg(test)]
mod test_support;

pub use app_core::GalleryCore;
pub use gallery_service::{GalleryService, StagedUpload};
pub use image_service::ImageService;
