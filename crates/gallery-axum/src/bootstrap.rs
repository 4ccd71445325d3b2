//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use gallery_core::paths::{DirectoryCreationStrategy, ensure_directory};
use gallery_core::{GalleryCore, GalleryStore, ImageResizer, ResizeLimits};
use gallery_fs::LocalGalleryStore;
use gallery_image::ImageCrateResizer;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default request body limit (uploads included).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Address to bind.
    pub host: String,
    /// Galleries root; created on startup if missing.
    pub galleries_dir: PathBuf,
    /// Where multipart uploads are written before they are moved into a gallery.
    pub staging_dir: PathBuf,
    /// Maximum request body size in bytes.
    pub body_limit_bytes: usize,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Bounds on resized output.
    pub resize_limits: ResizeLimits,
}

impl ServerConfig {
    /// Config with default network settings serving `galleries_dir`.
    pub fn for_root(galleries_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            galleries_dir: galleries_dir.into(),
            staging_dir: std::env::temp_dir(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors: CorsConfig::default(),
            resize_limits: ResizeLimits::default(),
        }
    }

    /// Stage uploads in `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Bound resized images by `limits`.
    #[must_use]
    pub fn with_resize_limits(mut self, limits: ResizeLimits) -> Self {
        self.resize_limits = limits;
        self
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AppContext {
    /// The core application facade.
    pub core: Arc<GalleryCore>,
    /// The configuration the server was bootstrapped with.
    pub config: ServerConfig,
}

/// Build the application context: prepare directories, then wire the
/// filesystem store and the image resizer into the core.
pub fn bootstrap(config: ServerConfig) -> Result<AppContext> {
    ensure_directory(&config.galleries_dir, DirectoryCreationStrategy::AutoCreate)
        .with_context(|| format!("galleries root {}", config.galleries_dir.display()))?;
    ensure_directory(&config.staging_dir, DirectoryCreationStrategy::AutoCreate)
        .with_context(|| format!("staging directory {}", config.staging_dir.display()))?;

    let store = LocalGalleryStore::open(&config.galleries_dir)?;

    info!(
        target: "gallery.paths",
        galleries_dir = %store.root().display(),
        staging_dir = %config.staging_dir.display(),
        max_side = config.resize_limits.max_side,
        max_pixels = config.resize_limits.max_pixels,
        "Axum bootstrap resolved paths"
    );

    let store: Arc<dyn GalleryStore> = Arc::new(store);
    let resizer: Arc<dyn ImageResizer> = Arc::new(ImageCrateResizer::new());
    let core = Arc::new(GalleryCore::with_resize_limits(
        store,
        resizer,
        config.resize_limits,
    ));

    Ok(AppContext { core, config })
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Bootstrap and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let ctx = bootstrap(config)?;
    let app = crate::routes::create_router(ctx);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Gallery server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gallery server shut down");
    Ok(())
}
