//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AppContext, CorsConfig};
use crate::handlers::{galleries, images};
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Gallery and image routes, without state applied.
///
/// Axum 0.8 brace syntax: `{path}` is the gallery directory name, `{item}`
/// a file inside it and `{size}` the `{w}x{h}` segment.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(galleries::list).post(galleries::create))
        .route(
            "/gallery/{path}",
            get(galleries::get)
                .post(galleries::upload)
                .delete(galleries::delete_gallery),
        )
        .route("/gallery/{path}/{item}", delete(galleries::delete_item))
        .route("/images/{size}/{path}/{item}", get(images::resized))
}

/// Create the main router with all routes and middleware.
pub fn create_router(ctx: AppContext) -> Router {
    let cors = build_cors_layer(&ctx.config.cors);
    let body_limit = ctx.config.body_limit_bytes;
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
