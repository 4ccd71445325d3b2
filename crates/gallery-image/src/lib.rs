//! Image adapter for the gallery server.
//!
//! Implements the [`ImageResizer`] port with the `image` crate. Decoding,
//! resampling (Lanczos3) and re-encoding all happen in memory; the caller
//! decides which thread runs them.

#![deny(unused_crate_dependencies)]

mod resizer;

pub use resizer::ImageCrateResizer;

// Re-export the port from core for convenience
pub use gallery_core::{ImageError, ImageResizer, ResizedImage};
