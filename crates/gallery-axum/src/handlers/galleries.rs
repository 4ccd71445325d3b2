//! Gallery handlers - list, create, upload and delete.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use gallery_core::GalleryDetail;
use serde_json::Value;
use tracing::debug;

use crate::dto::{GalleriesResponse, MessageResponse, UploadResponse};
use crate::error::HttpError;
use crate::state::AppState;
use crate::upload::{StagedFile, stage_upload};

const GALLERY_CREATED: &str = "Gallery created.";

/// List all galleries with their images.
pub async fn list(State(state): State<AppState>) -> Result<Json<GalleriesResponse>, HttpError> {
    let galleries = state.core.galleries().list_galleries()?;
    Ok(Json(GalleriesResponse { galleries }))
}

/// Create a gallery from `{ "name": ... }`.
///
/// A body that is not JSON is treated like one without a `name`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), HttpError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable create-gallery body");
            Value::Null
        }
    };

    state.core.galleries().create_gallery(&body)?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(GALLERY_CREATED))))
}

/// Get one gallery and its images.
pub async fn get(
    State(state): State<AppState>,
    Path(gallery): Path<String>,
) -> Result<Json<GalleryDetail>, HttpError> {
    Ok(Json(state.core.galleries().get_gallery(&gallery)?))
}

/// Upload an image into a gallery.
///
/// A request that is not multipart counts as one without a file.
pub async fn upload(
    State(state): State<AppState>,
    Path(gallery): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), HttpError> {
    let staged = match multipart {
        Ok(mut multipart) => stage_upload(&mut multipart, &state.config.staging_dir).await?,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Upload without a multipart body");
            None
        }
    };

    let image = state
        .core
        .galleries()
        .upload_image(&gallery, staged.as_ref().map(StagedFile::as_upload))?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            uploaded: vec![image],
        }),
    ))
}

/// Delete a gallery, or whatever entry has that name at the root.
pub async fn delete_gallery(
    State(state): State<AppState>,
    Path(gallery): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    let deleted = state.core.galleries().delete_path(&gallery, None)?;
    Ok(Json(MessageResponse::new(deleted.message())))
}

/// Delete one image inside a gallery.
pub async fn delete_item(
    State(state): State<AppState>,
    Path((gallery, item)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, HttpError> {
    let deleted = state.core.galleries().delete_path(&gallery, Some(&item))?;
    Ok(Json(MessageResponse::new(deleted.message())))
}
