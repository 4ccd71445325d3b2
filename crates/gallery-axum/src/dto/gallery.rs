//! Gallery response envelopes.

use gallery_core::{Gallery, Image};
use serde::{Deserialize, Serialize};

/// `GET /gallery` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleriesResponse {
    pub galleries: Vec<Gallery>,
}

/// `POST /gallery/{path}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub uploaded: Vec<Image>,
}

/// `{ "message": ... }`, used for confirmations and for most errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
