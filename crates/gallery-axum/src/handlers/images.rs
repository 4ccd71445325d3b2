//! Resized image handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use gallery_core::Dimensions;

use crate::error::HttpError;
use crate::state::AppState;

/// Serve `{gallery}/{item}` resized to the `{w}x{h}` size segment.
///
/// Either side may be `0` (or empty) and is then inferred from the image's
/// aspect ratio.
pub async fn resized(
    State(state): State<AppState>,
    Path((size, gallery, item)): Path<(String, String, String)>,
) -> Result<Response, HttpError> {
    let requested: Dimensions = size.parse()?;
    let resized = state
        .core
        .images()
        .resized_image(&gallery, &item, requested)
        .await?;

    Ok(([(header::CONTENT_TYPE, resized.content_type)], resized.bytes).into_response())
}
