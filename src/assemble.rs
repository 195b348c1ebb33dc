//! Building new documents out of pages of existing ones.

use crate::error::{Error, Result};
use crate::pdf::DocumentCapability;

/// Serialized merge result plus the number of pages it holds.
#[derive(Debug, Clone)]
pub struct MergeOutput {
    pub bytes: Vec<u8>,
    pub total_pages: u32,
}

/// Build a document from `pages` (1-based) of `source`, in the given order.
///
/// Every page is checked against the source before anything is copied; the
/// first one outside `1..=page_count` aborts the split.
pub fn split_document<B: DocumentCapability>(
    backend: &B,
    source: &B::Source,
    pages: &[u32],
) -> Result<Vec<u8>> {
    let total = backend.page_count(source);

    if let Some(&page) = pages.iter().find(|&&page| page == 0 || page > total) {
        return Err(Error::PageOutOfRange { page, total });
    }

    let mut result = backend.create();
    let indices: Vec<u32> = pages.iter().map(|&page| page - 1).collect();
    for page in backend.copy_pages(&mut result, source, &indices)? {
        backend.add_page(&mut result, page);
    }

    log::debug!("split {} of {} page(s)", indices.len(), total);
    backend.serialize(result)
}

/// Concatenate every page of every source, sources in the given order.
///
/// No minimum number of sources is imposed here.
pub fn merge_documents<B: DocumentCapability>(
    backend: &B,
    sources: &[B::Source],
) -> Result<MergeOutput> {
    let mut result = backend.create();
    let mut total_pages = 0;

    for (i, source) in sources.iter().enumerate() {
        let indices: Vec<u32> = backend.page_indices(source).collect();
        for page in backend.copy_pages(&mut result, source, &indices)? {
            backend.add_page(&mut result, page);
        }
        log::debug!("merged source {} ({} page(s))", i + 1, indices.len());
        total_pages += backend.page_count(source);
    }

    Ok(MergeOutput {
        bytes: backend.serialize(result)?,
        total_pages,
    })
}
