//! Image resizing port.
//!
//! Pixel work is delegated to an adapter so the core never links an image
//! codec. Both operations are pure: bytes in, bytes out, no I/O.

use thiserror::Error;

use crate::domain::Dimensions;

/// Errors returned by an [`ImageResizer`].
#[derive(Debug, Error)]
pub enum ImageError {
    /// The bytes are not an image the adapter can decode.
    #[error("{0}")]
    Decode(String),

    /// The resized image could not be encoded.
    #[error("{0}")]
    Encode(String),
}

/// A resized, re-encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes` (e.g. `image/png`).
    pub content_type: String,
    /// Final pixel size.
    pub dimensions: Dimensions,
}

/// Port for probing and resizing encoded images.
pub trait ImageResizer: Send + Sync {
    /// Intrinsic pixel size of an encoded image.
    fn probe(&self, bytes: &[u8]) -> Result<Dimensions, ImageError>;

    /// Decode, resize to exactly `target` and re-encode.
    fn resize(&self, bytes: &[u8], target: Dimensions) -> Result<ResizedImage, ImageError>;
}
