use crate::assemble::split_document;
use crate::page_range::{format_page_list, parse_page_range};
use crate::paths::split_output_path;
use crate::pdf::LopdfBackend;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    pub input: PathBuf,
    /// Page specification, e.g. "1,3,5-8"
    pub pages: String,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub output: PathBuf,
    pub page_count: usize,
}

pub fn execute(options: &SplitOptions) -> Result<SplitReport> {
    let pages = parse_page_range(&options.pages)?;
    let output = split_output_path(&options.input, options.output.as_deref());

    log::info!(
        "splitting {} (pages {})",
        options.input.display(),
        format_page_list(&pages)
    );
    let source = super::load_source(&options.input)?;
    let bytes = split_document(&LopdfBackend, &source, &pages)?;
    super::write_output(&output, &bytes)?;

    Ok(SplitReport {
        output,
        page_count: pages.len(),
    })
}

pub fn run(options: &SplitOptions) -> Result<()> {
    let report = execute(options)?;
    println!(
        "Extracted {} page(s) to {}",
        report.page_count,
        report.output.display()
    );
    Ok(())
}
