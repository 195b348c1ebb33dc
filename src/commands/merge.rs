use crate::assemble::merge_documents;
use crate::error::Error;
use crate::paths::merge_output_path;
use crate::pdf::LopdfBackend;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fewest inputs a merge accepts.
pub const MIN_INPUTS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub output: PathBuf,
    pub file_count: usize,
    pub page_count: u32,
}

pub fn execute(options: &MergeOptions, cwd: &Path) -> Result<MergeReport> {
    if options.inputs.len() < MIN_INPUTS {
        return Err(Error::InsufficientInput {
            required: MIN_INPUTS,
            given: options.inputs.len(),
        }
        .into());
    }

    let output = merge_output_path(options.output.as_deref(), cwd);
    let sources = options
        .inputs
        .iter()
        .map(|input| super::load_source(&cwd.join(input)))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_documents(&LopdfBackend, &sources)?;
    super::write_output(&output, &merged.bytes)?;

    Ok(MergeReport {
        output,
        file_count: sources.len(),
        page_count: merged.total_pages,
    })
}

pub fn run(options: &MergeOptions, cwd: &Path) -> Result<()> {
    let report = execute(options, cwd)?;
    println!(
        "Merged {} page(s) from {} file(s) to {}",
        report.page_count,
        report.file_count,
        report.output.display()
    );
    Ok(())
}
