//! Command handlers.
//!
//! Each handler resolves what it needs from the core and prints or serves;
//! none of them touch galleries directly.

pub mod paths;
pub mod serve;
