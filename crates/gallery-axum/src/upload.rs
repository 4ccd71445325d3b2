//! Multipart upload staging.
//!
//! The uploaded file is streamed to a temporary file in the staging
//! directory; the gallery service then moves it into place. A staged file
//! that is never moved is deleted when [`StagedFile`] is dropped.

use std::path::Path;

use axum::extract::Multipart;
use gallery_core::StagedUpload;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::HttpError;

/// Multipart field that carries the image.
pub const UPLOAD_FIELD: &str = "name";

/// An upload written to the staging directory.
#[derive(Debug)]
pub struct StagedFile {
    file_name: String,
    path: TempPath,
}

impl StagedFile {
    pub fn as_upload(&self) -> StagedUpload<'_> {
        StagedUpload {
            file_name: &self.file_name,
            path: &self.path,
        }
    }
}

fn staging_error(err: &std::io::Error) -> HttpError {
    HttpError::Internal(format!("Failed to stage upload: {err}"))
}

/// Stage the first file sent in the `name` field.
///
/// Returns `None` when the form has no such file part; other fields are
/// skipped.
pub async fn stage_upload(
    multipart: &mut Multipart,
    staging_dir: &Path,
) -> Result<Option<StagedFile>, HttpError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let (file, path) = tempfile::Builder::new()
            .prefix(".upload-")
            .tempfile_in(staging_dir)
            .map_err(|e| staging_error(&e))?
            .into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let mut size = 0u64;
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk).await.map_err(|e| staging_error(&e))?;
            size += chunk.len() as u64;
        }
        file.flush().await.map_err(|e| staging_error(&e))?;

        debug!(file = %file_name, size, staged = %path.display(), "Upload staged");
        return Ok(Some(StagedFile { file_name, path }));
    }

    Ok(None)
}
