//! `GalleryCore` - the primary application facade.
//!
//! Adapters (HTTP, CLI) receive a `GalleryCore` instance built at their
//! composition root and use it to access all functionality.

use std::sync::Arc;

use crate::domain::ResizeLimits;
use crate::ports::{GalleryStore, ImageResizer};

use super::{GalleryService, ImageService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(LocalGalleryStore::open("./gallery")?);
/// let resizer = Arc::new(ImageCrateResizer::new());
/// let core = GalleryCore::new(store, resizer);
///
/// let galleries = core.galleries().list_galleries()?;
/// ```
pub struct GalleryCore {
    galleries: GalleryService,
    images: ImageService,
}

impl GalleryCore {
    /// Create a new `GalleryCore` over the given store and resizer.
    pub fn new(store: Arc<dyn GalleryStore>, resizer: Arc<dyn ImageResizer>) -> Self {
        Self {
            galleries: GalleryService::new(Arc::clone(&store)),
            images: ImageService::new(store, resizer),
        }
    }

    /// Like [`GalleryCore::new`] with explicit output limits for resizing.
    pub fn with_resize_limits(
        store: Arc<dyn GalleryStore>,
        resizer: Arc<dyn ImageResizer>,
        limits: ResizeLimits,
    ) -> Self {
        Self {
            galleries: GalleryService::new(Arc::clone(&store)),
            images: ImageService::new(store, resizer).with_limits(limits),
        }
    }

    /// Access the gallery CRUD service.
    pub const fn galleries(&self) -> &GalleryService {
        &self.galleries
    }

    /// Access the image resize service.
    pub const fn images(&self) -> &ImageService {
        &self.images
    }
}
