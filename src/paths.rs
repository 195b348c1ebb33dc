//! Default output locations. Relative paths are resolved against an
//! explicitly supplied base directory, never the process working directory.

use std::path::{Path, PathBuf};

pub const SPLIT_SUFFIX: &str = "_split";
pub const MERGE_FILE_NAME: &str = "merged.pdf";

/// Where a split of `input` is written.
///
/// Defaults to `<stem>_split.pdf` next to the input; a relative `output` is
/// taken relative to the input's directory as well.
pub fn split_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    let input_dir = input.parent().unwrap_or_else(|| Path::new(""));
    match output {
        Some(output) => input_dir.join(output),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy())
                .unwrap_or_else(|| "document".into());
            input_dir.join(format!("{}{}.pdf", stem, SPLIT_SUFFIX))
        }
    }
}

/// Where a merge is written: `output` (relative to `cwd`) or `cwd/merged.pdf`.
pub fn merge_output_path(output: Option<&Path>, cwd: &Path) -> PathBuf {
    cwd.join(output.unwrap_or_else(|| Path::new(MERGE_FILE_NAME)))
}
