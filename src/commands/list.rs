use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub dir: PathBuf,
    pub recursive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfEntry {
    pub path: PathBuf,
    /// `None` when the file could not be parsed
    pub page_count: Option<u32>,
}

/// PDF files under `dir`, sorted by path. Matching on the extension is
/// case-insensitive.
pub fn find_pdfs(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if entry.file_type().is_file() && is_pdf(entry.path()) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

pub fn execute(options: &ListOptions) -> Result<Vec<PdfEntry>> {
    let entries = find_pdfs(&options.dir, options.recursive)?
        .into_iter()
        .map(|path| {
            let page_count = match super::load_source(&path) {
                Ok(doc) => Some(doc.page_count()),
                Err(e) => {
                    log::warn!("{:#}", e);
                    None
                }
            };
            PdfEntry { path, page_count }
        })
        .collect();
    Ok(entries)
}

pub fn run(options: &ListOptions) -> Result<()> {
    let entries = execute(options)?;

    if entries.is_empty() {
        println!("No PDF files in {}", options.dir.display());
        return Ok(());
    }

    for entry in entries {
        let path = entry
            .path
            .strip_prefix(&options.dir)
            .unwrap_or(&entry.path);
        match entry.page_count {
            Some(count) => println!("{} ({} pages)", path.display(), count),
            None => println!("{} (unreadable)", path.display()),
        }
    }

    Ok(())
}
