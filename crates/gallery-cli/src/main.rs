//! CLI entry point.
//!
//! Loads `.env`, installs the tracing subscriber and dispatches to the
//! command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use gallery_cli::handlers::serve::ServeOptions;
use gallery_cli::{Cli, Commands, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so clap sees them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            host,
            allowed_origins,
            body_limit_mb,
            staging_dir,
            max_image_side,
            max_image_pixels,
        } => {
            let options = ServeOptions {
                port,
                host,
                allowed_origins,
                body_limit_mb,
                staging_dir,
                max_image_side,
                max_image_pixels,
            };
            handlers::serve::execute(cli.root.as_deref(), options).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(cli.root.as_deref())?;
        }
    }

    Ok(())
}
