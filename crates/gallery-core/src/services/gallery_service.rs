//! Gallery service - CRUD over galleries and their images.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{Deleted, Gallery, GalleryDetail, GalleryPath, GalleryRef, Image};
use crate::ports::{CoreError, EntryKind, GalleryStore};
use crate::utils::validation::validate_gallery_body;

const GALLERY_EXISTS: &str = "Gallery with the specified name already exists.";
const GALLERY_NOT_FOUND: &str = "The selected gallery does not exist.";
const NO_UPLOAD: &str = "Invalid request - no file to upload.";
const UPLOAD_GALLERY_NOT_FOUND: &str = "Upload gallery not found.";
const DELETE_NOT_FOUND: &str = "The selected gallery/image does not exist.";

/// An uploaded file already written to a temporary location.
#[derive(Debug, Clone, Copy)]
pub struct StagedUpload<'a> {
    /// Client-supplied file name; becomes the image file name.
    pub file_name: &'a str,
    /// Where the upload was staged.
    pub path: &'a Path,
}

/// Service for gallery and image CRUD.
///
/// Every operation checks existence and type through the store before it
/// performs at most one mutation.
pub struct GalleryService {
    store: Arc<dyn GalleryStore>,
}

impl GalleryService {
    /// Create a new gallery service over the given store.
    pub fn new(store: Arc<dyn GalleryStore>) -> Self {
        Self { store }
    }

    /// List every gallery under the root with all of its images.
    ///
    /// Plain files at the root are not galleries and are skipped.
    pub fn list_galleries(&self) -> Result<Vec<Gallery>, CoreError> {
        let entries = self.store.list(&GalleryPath::root())?;

        entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
            .map(|entry| -> Result<Gallery, CoreError> {
                let path = GalleryPath::gallery(&entry.name)?;
                let gallery = GalleryRef::new(&entry.name);
                Ok(Gallery {
                    images: self.read_images(&entry.name, &path)?,
                    name: gallery.name,
                    path: gallery.path,
                })
            })
            .collect()
    }

    /// Get one gallery and its images.
    pub fn get_gallery(&self, name: &str) -> Result<GalleryDetail, CoreError> {
        let path = GalleryPath::gallery(name)?;
        if self.store.kind(&path)? != Some(EntryKind::Directory) {
            return Err(CoreError::NotFound(GALLERY_NOT_FOUND.to_string()));
        }

        Ok(GalleryDetail {
            gallery: GalleryRef::new(name),
            images: self.read_images(name, &path)?,
        })
    }

    /// Create a gallery from a JSON request body.
    ///
    /// The body is checked against the gallery schema, but violations are
    /// only logged. The request is rejected with [`CoreError::InvalidSchema`]
    /// when `name` is missing, empty, not a string, contains `/`, or is not a
    /// usable directory name.
    pub fn create_gallery(&self, body: &Value) -> Result<(), CoreError> {
        let violations = validate_gallery_body(body);
        if !violations.is_empty() {
            warn!(errors = ?violations, "Validation errors in create-gallery body");
        }

        let name = body
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .ok_or(CoreError::InvalidSchema)?;
        let path = GalleryPath::gallery(name).map_err(|_| CoreError::InvalidSchema)?;

        if self.store.kind(&path)?.is_some() {
            return Err(CoreError::AlreadyExists(GALLERY_EXISTS.to_string()));
        }

        self.store.create_dir(&path).map_err(|err| match CoreError::from(err) {
            // Lost a race with a concurrent create
            CoreError::AlreadyExists(_) => CoreError::AlreadyExists(GALLERY_EXISTS.to_string()),
            other => other,
        })?;
        info!(gallery = %name, "Gallery created");
        Ok(())
    }

    /// Move a staged upload into a gallery and describe the stored image.
    ///
    /// `None` means the request carried no file. An existing image with the
    /// same name is replaced.
    pub fn upload_image(
        &self,
        gallery: &str,
        upload: Option<StagedUpload<'_>>,
    ) -> Result<Image, CoreError> {
        let upload = upload.ok_or_else(|| CoreError::InvalidInput(NO_UPLOAD.to_string()))?;

        let gallery_path = GalleryPath::gallery(gallery)?;
        if self.store.kind(&gallery_path)? != Some(EntryKind::Directory) {
            return Err(CoreError::NotFound(UPLOAD_GALLERY_NOT_FOUND.to_string()));
        }

        let dest = GalleryPath::item(gallery, upload.file_name)?;
        self.store.persist(upload.path, &dest)?;
        let modified = self.store.modified(&dest)?;

        info!(gallery = %gallery, image = %upload.file_name, "Image uploaded");
        Ok(Image::new(gallery, upload.file_name, modified))
    }

    /// Delete a whole gallery, or a single entry inside it when `item` is set.
    ///
    /// A directory is removed recursively; anything else is unlinked.
    pub fn delete_path(&self, gallery: &str, item: Option<&str>) -> Result<Deleted, CoreError> {
        let path = match item {
            Some(item) => GalleryPath::item(gallery, item)?,
            None => GalleryPath::gallery(gallery)?,
        };

        let deleted = match self.store.kind(&path)? {
            None => return Err(CoreError::NotFound(DELETE_NOT_FOUND.to_string())),
            Some(EntryKind::Directory) => {
                self.store.remove_dir_all(&path)?;
                Deleted::Gallery
            }
            Some(EntryKind::File) => {
                self.store.remove_file(&path)?;
                Deleted::Image
            }
        };

        info!(path = %path, kind = ?deleted, "Deleted");
        Ok(deleted)
    }

    /// Every entry of a gallery directory as an image listing.
    fn read_images(&self, gallery: &str, path: &GalleryPath) -> Result<Vec<Image>, CoreError> {
        Ok(self
            .store
            .list(path)?
            .into_iter()
            .map(|entry| Image::new(gallery, &entry.name, entry.modified))
            .collect())
    }
}
