//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use gallery_axum::{ServerConfig, start_server};
use gallery_core::{ResizeLimits, resolve_galleries_dir};
use tracing::info;

/// Options of `gallery serve`, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub port: u16,
    pub host: String,
    pub allowed_origins: Vec<String>,
    pub body_limit_mb: usize,
    pub staging_dir: Option<PathBuf>,
    pub max_image_side: u32,
    pub max_image_pixels: u64,
}

/// Turn command-line options into a server configuration.
pub fn build_config(galleries_dir: PathBuf, options: ServeOptions) -> ServerConfig {
    let mut config = ServerConfig::for_root(galleries_dir);
    config.port = options.port;
    config.host = options.host;
    config.body_limit_bytes = options.body_limit_mb.saturating_mul(1024 * 1024);
    config = config.with_resize_limits(ResizeLimits::new(
        options.max_image_side,
        options.max_image_pixels,
    ));

    if let Some(dir) = options.staging_dir {
        config = config.with_staging_dir(dir);
    }
    if !options.allowed_origins.is_empty() {
        config = config.with_allowed_origins(options.allowed_origins);
    }
    config
}

/// Resolve the galleries root and run the server until Ctrl-C.
pub async fn execute(root: Option<&str>, options: ServeOptions) -> Result<()> {
    let resolution = resolve_galleries_dir(root)?;
    info!(
        galleries_dir = %resolution.path.display(),
        source = %resolution.source,
        "Resolved galleries root"
    );

    start_server(build_config(resolution.path, options)).await
}
