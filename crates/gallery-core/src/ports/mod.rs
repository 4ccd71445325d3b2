//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `std::fs` or codec types in any signature
//! - Store paths are always [`GalleryPath`](crate::domain::GalleryPath), never raw strings
//! - Each adapter error converts into [`CoreError`] via `From`

pub mod gallery_store;
pub mod image_resizer;

use thiserror::Error;

use crate::paths::PathError;

pub use gallery_store::{EntryInfo, EntryKind, GalleryStore, StoreError};
pub use image_resizer::{ImageError, ImageResizer, ResizedImage};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own representation (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Missing or malformed client input.
    #[error("{0}")]
    InvalidInput(String),

    /// The create-gallery body does not carry a usable `name`.
    #[error("Bad JSON object: 'name' is a required property")]
    InvalidSchema,

    /// A resize was requested with width and height both `0`.
    #[error("Width and height cannot both be 0")]
    MissingDimensions,

    /// A path parameter is not a single normal path component, or resolves
    /// outside the galleries root.
    #[error("Invalid path: {0}")]
    PathEscape(String),

    /// The gallery, image or path does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The gallery already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// The stored bytes are not a decodable image.
    #[error("Image could not be decoded: {0}")]
    Decode(String),

    /// Unexpected filesystem failure (permissions, I/O).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => Self::NotFound(format!("Not found: {path}")),
            StoreError::AlreadyExists(path) => Self::AlreadyExists(format!("Already exists: {path}")),
            StoreError::OutsideRoot(path) => Self::PathEscape(path),
            StoreError::Io { path, reason } => {
                Self::Storage(format!("I/O error on {path}: {reason}"))
            }
        }
    }
}

impl From<ImageError> for CoreError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::Decode(msg) => Self::Decode(msg),
            ImageError::Encode(msg) => Self::Internal(format!("Image encoding failed: {msg}")),
        }
    }
}

impl From<PathError> for CoreError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidSegment(segment) => Self::PathEscape(segment),
            other => Self::Internal(other.to_string()),
        }
    }
}
