//! Path utilities for the galleries root.
//!
//! This module provides the canonical resolution of the galleries root
//! directory for every adapter and the helpers that make sure it exists.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod galleries;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Galleries root
pub use galleries::{
    DEFAULT_GALLERIES_DIR, GALLERIES_DIR_ENV, GalleriesDirResolution, GalleriesDirSource,
    resolve_galleries_dir,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
