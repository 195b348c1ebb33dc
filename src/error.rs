//! Error types for page selection and document assembly.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `start-end` token that is malformed or inverted.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A single-page token that is not a decimal integer.
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(String),

    /// A requested 1-based page falls outside `1..=total`.
    #[error("Page {page} is out of range. PDF has {total} pages.")]
    PageOutOfRange { page: u32, total: u32 },

    /// A zero-based page index handed to the document backend is past the end.
    #[error("Page index {index} is out of bounds for a document with {total} pages")]
    PageIndexOutOfBounds { index: u32, total: u32 },

    /// The input bytes could not be read as a PDF.
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// The assembled document could not be written out.
    #[error("Failed to serialize PDF: {0}")]
    Serialize(String),

    #[error("At least {required} PDF files are required to merge (got {given})")]
    InsufficientInput { required: usize, given: usize },
}
