pub mod info;
pub mod list;
pub mod merge;
pub mod split;

use crate::pdf::{DocumentCapability, LopdfBackend, SourceDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Read and parse a PDF from disk.
pub fn load_source(path: &Path) -> Result<SourceDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    LopdfBackend
        .load(&bytes)
        .with_context(|| format!("Failed to open PDF: {}", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to save PDF: {}", path.display()))?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
