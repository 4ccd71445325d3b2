//! Paths command handler.
//!
//! Displays the resolved galleries root for diagnostics.

use anyhow::Result;

use gallery_core::resolve_galleries_dir;

/// Print the galleries root and its source in `key = value` format.
pub fn execute(root: Option<&str>) -> Result<()> {
    let resolution = resolve_galleries_dir(root)?;
    println!("{resolution}");
    Ok(())
}
