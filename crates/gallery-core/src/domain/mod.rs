//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (filesystem, HTTP, image codecs).
//!
//! # Structure
//!
//! - `gallery` - Gallery and image listing types
//! - `path` - Validated locations inside the galleries root
//! - `dimensions` - Pixel sizes and aspect-ratio inference for resizing

mod dimensions;
mod gallery;
mod path;

pub use dimensions::{Dimensions, ResizeLimits, infer_dimensions};
pub use gallery::{Deleted, Gallery, GalleryDetail, GalleryRef, Image, encode_spaces, image_name};
pub use path::GalleryPath;
