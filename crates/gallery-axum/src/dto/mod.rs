//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Response envelopes live here; the gallery and image shapes themselves
//! are the core domain types, which already serialize as the API expects.

pub mod gallery;
pub mod schema;

pub use gallery::{GalleriesResponse, MessageResponse, UploadResponse};
pub use schema::{SchemaErrorPayload, SchemaErrorResponse};
