pub mod document;
#[cfg(test)]
pub mod fixtures;

pub use document::{LopdfBackend, SourceDocument};

use crate::error::Result;
use std::ops::Range;

/// The primitives page assembly needs from a PDF library.
///
/// Source documents are only ever read. Result documents start empty, have
/// pages appended in call order, and are consumed by `serialize`.
pub trait DocumentCapability {
    type Source;
    type Output;
    type Page;

    /// Parse a document from raw bytes.
    fn load(&self, bytes: &[u8]) -> Result<Self::Source>;

    /// Create an empty document with no pages.
    fn create(&self) -> Self::Output;

    fn page_count(&self, doc: &Self::Source) -> u32;

    /// Zero-based indices of every page, in document order.
    fn page_indices(&self, doc: &Self::Source) -> Range<u32> {
        0..self.page_count(doc)
    }

    /// Copy the pages at `indices` out of `source`, in exactly that order.
    ///
    /// The returned handles are not yet part of `dest`; pass them to
    /// `add_page` to append them.
    fn copy_pages(
        &self,
        dest: &mut Self::Output,
        source: &Self::Source,
        indices: &[u32],
    ) -> Result<Vec<Self::Page>>;

    /// Append a copied page to the end of `dest`.
    fn add_page(&self, dest: &mut Self::Output, page: Self::Page);

    fn serialize(&self, dest: Self::Output) -> Result<Vec<u8>>;
}
