//! Image service - on-demand resizing of stored images.
//!
//! A request names the target size as `{w}x{h}` where either side may be `0`.
//! The missing side is inferred from the image's own aspect ratio (see
//! [`infer_dimensions`]). Decoding and resizing run on the blocking thread
//! pool so a large image never stalls the async runtime.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Dimensions, GalleryPath, ResizeLimits, infer_dimensions};
use crate::ports::{CoreError, EntryKind, GalleryStore, ImageResizer, ResizedImage};

const IMAGE_NOT_FOUND: &str = "The specified image not found.";

/// Service for resizing images.
pub struct ImageService {
    store: Arc<dyn GalleryStore>,
    resizer: Arc<dyn ImageResizer>,
    limits: ResizeLimits,
}

impl ImageService {
    /// Create a new image service with the given store and resizer.
    pub fn new(store: Arc<dyn GalleryStore>, resizer: Arc<dyn ImageResizer>) -> Self {
        Self {
            store,
            resizer,
            limits: ResizeLimits::default(),
        }
    }

    /// Replace the output size limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ResizeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub const fn limits(&self) -> ResizeLimits {
        self.limits
    }

    /// Resize encoded image bytes to `requested`.
    ///
    /// Fails with [`CoreError::MissingDimensions`] before any decoding when
    /// both sides are `0`, with [`CoreError::InvalidInput`] when the target
    /// exceeds the configured [`ResizeLimits`], and with [`CoreError::Decode`]
    /// when the bytes are not an image.
    pub async fn resize(
        &self,
        bytes: Vec<u8>,
        requested: Dimensions,
    ) -> Result<ResizedImage, CoreError> {
        if requested.is_unspecified() {
            return Err(CoreError::MissingDimensions);
        }
        // Explicit sides are checked before the image is touched
        self.limits.check(requested)?;

        let limits = self.limits;
        let resizer = Arc::clone(&self.resizer);
        let result = tokio::task::spawn_blocking(move || -> Result<ResizedImage, CoreError> {
            let intrinsic = resizer.probe(&bytes)?;
            let target =
                infer_dimensions(intrinsic, requested).ok_or(CoreError::MissingDimensions)?;
            limits.check(target)?;
            debug!(%intrinsic, %requested, %target, "Resizing image");
            Ok(resizer.resize(&bytes, target)?)
        })
        .await
        .map_err(|e| CoreError::Internal(format!("resize task failed: {e}")))?;

        if let Err(CoreError::Decode(ref reason)) = result {
            warn!(%reason, "Image decode failed");
        }
        result
    }

    /// Load `gallery/item` from the store and resize it.
    ///
    /// The image must exist as a file; the size check happens before the
    /// file is read.
    pub async fn resized_image(
        &self,
        gallery: &str,
        item: &str,
        requested: Dimensions,
    ) -> Result<ResizedImage, CoreError> {
        let path = GalleryPath::item(gallery, item)?;
        if self.store.kind(&path)? != Some(EntryKind::File) {
            return Err(CoreError::NotFound(IMAGE_NOT_FOUND.to_string()));
        }
        if requested.is_unspecified() {
            return Err(CoreError::MissingDimensions);
        }

        let bytes = self.store.read(&path)?;
        self.resize(bytes, requested).await
    }
}
