//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Serve a directory of photo galleries over HTTP.
#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Serve a directory of photo galleries over HTTP")]
#[command(version)]
pub struct Cli {
    /// Override the galleries root for this invocation (else GALLERY_ROOT, else ./gallery)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
