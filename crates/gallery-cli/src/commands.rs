//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use gallery_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use gallery_core::ResizeLimits;

/// Default upload limit in MiB.
pub const DEFAULT_BODY_LIMIT_MB: usize = 50;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gallery HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "GALLERY_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, env = "GALLERY_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Allow only these CORS origins (repeatable); all origins when omitted
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
        /// Maximum request body size in MiB
        #[arg(long, default_value_t = DEFAULT_BODY_LIMIT_MB)]
        body_limit_mb: usize,
        /// Directory for staging uploads (defaults to the system temp dir)
        #[arg(long, env = "GALLERY_STAGING_DIR")]
        staging_dir: Option<PathBuf>,
        /// Largest width or height a resize may produce
        #[arg(long, env = "GALLERY_MAX_IMAGE_SIDE", default_value_t = ResizeLimits::DEFAULT_MAX_SIDE)]
        max_image_side: u32,
        /// Largest pixel count a resize may produce
        #[arg(long, env = "GALLERY_MAX_IMAGE_PIXELS", default_value_t = ResizeLimits::DEFAULT_MAX_PIXELS)]
        max_image_pixels: u64,
    },

    /// Show the resolved galleries root and where it came from
    Paths,
}
