use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct PdfInfo {
    pub path: PathBuf,
    pub page_count: u32,
    pub version: String,
}

pub fn execute(path: &Path) -> Result<PdfInfo> {
    let doc = super::load_source(path)?;
    Ok(PdfInfo {
        path: path.to_path_buf(),
        page_count: doc.page_count(),
        version: doc.version().to_string(),
    })
}

pub fn run(path: &Path) -> Result<()> {
    let info = execute(path)?;

    println!("File: {}", info.path.display());
    println!("Pages: {}", info.page_count);
    println!("PDF version: {}", info.version);

    Ok(())
}
