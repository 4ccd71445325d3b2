//! Axum web adapter for the gallery server.
//!
//! Exposes the gallery API over HTTP:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/gallery` | list galleries |
//! | POST | `/gallery` | create a gallery |
//! | GET | `/gallery/{path}` | one gallery |
//! | POST | `/gallery/{path}` | upload an image (multipart field `name`) |
//! | DELETE | `/gallery/{path}[/{item}]` | delete a gallery or an image |
//! | GET | `/images/{w}x{h}/{path}/{item}` | resized image bytes |
//!
//! [`bootstrap`] is the composition root; [`start_server`] binds and serves.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used by the integration tests only
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use image as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
mod upload;

// Re-export primary types
pub use bootstrap::{AppContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
