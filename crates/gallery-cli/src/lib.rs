//! Command-line interface for the gallery server.
//!
//! `gallery serve` runs the HTTP API, `gallery paths` prints where the
//! galleries root resolves to and why.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::Cli;
