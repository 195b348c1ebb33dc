use super::DocumentCapability;
use crate::error::{Error, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};

// Attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

// Guards the parent walk against cyclic page trees.
const MAX_TREE_DEPTH: usize = 64;

/// A loaded, read-only PDF.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl SourceDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes).map_err(|e| Error::Load(e.to_string()))?;
        Ok(Self::from_document(doc))
    }

    pub fn from_document(doc: Document) -> Self {
        // get_pages is keyed by 1-based page number, so values come out in page order
        let page_ids = doc.get_pages().into_values().collect();
        SourceDocument { doc, page_ids }
    }

    pub fn page_count(&self) -> u32 {
        self.page_ids.len() as u32
    }

    /// PDF header version, e.g. "1.7"
    pub fn version(&self) -> &str {
        &self.doc.version
    }
}

/// A document under construction: a catalog and a single flat page tree.
#[derive(Debug)]
pub struct ResultDocument {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl ResultDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        ResultDocument {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Write the page tree and return the finished lopdf document.
    pub fn finish(mut self) -> Document {
        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(self.kids.len() as i64)),
            (
                "Kids",
                Object::Array(self.kids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));
        self.doc.prune_objects();
        self.doc
    }
}

impl Default for ResultDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// A page dictionary lifted out of its source, with inherited attributes
/// resolved and no parent yet.
#[derive(Debug, Clone)]
pub struct CopiedPage(Dictionary);

/// `DocumentCapability` implemented on top of lopdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl DocumentCapability for LopdfBackend {
    type Source = SourceDocument;
    type Output = ResultDocument;
    type Page = CopiedPage;

    fn load(&self, bytes: &[u8]) -> Result<SourceDocument> {
        SourceDocument::from_bytes(bytes)
    }

    fn create(&self) -> ResultDocument {
        ResultDocument::new()
    }

    fn page_count(&self, doc: &SourceDocument) -> u32 {
        doc.page_count()
    }

    fn copy_pages(
        &self,
        dest: &mut ResultDocument,
        source: &SourceDocument,
        indices: &[u32],
    ) -> Result<Vec<CopiedPage>> {
        let total = source.page_count();
        if let Some(&index) = indices.iter().find(|&&index| index >= total) {
            return Err(Error::PageIndexOutOfBounds { index, total });
        }
        if indices.is_empty() {
            return Ok(Vec::new());
        }

        // Move the source's object ids above everything already in `dest`
        let mut imported = source.doc.clone();
        imported.renumber_objects_with(dest.doc.max_id + 1);
        dest.doc.max_id = dest.doc.max_id.max(imported.max_id);

        let page_ids: Vec<ObjectId> = imported.get_pages().into_values().collect();
        let mut pages = Vec::with_capacity(indices.len());
        for &index in indices {
            let page = flatten_page(&imported, page_ids[index as usize])?;
            pages.push(CopiedPage(page));
        }

        // Page dictionaries travel inside the handles; the source's own page
        // tree and document structure stay behind.
        for (id, object) in imported.objects {
            match object_type(&object) {
                Some(b"Catalog" | b"Pages" | b"Page" | b"Outlines" | b"Outline") => {}
                _ => {
                    dest.doc.objects.insert(id, object);
                }
            }
        }

        Ok(pages)
    }

    fn add_page(&self, dest: &mut ResultDocument, page: CopiedPage) {
        let mut dict = page.0;
        dict.set("Parent", Object::Reference(dest.pages_id));
        let id = dest.doc.add_object(Object::Dictionary(dict));
        dest.kids.push(id);
    }

    fn serialize(&self, dest: ResultDocument) -> Result<Vec<u8>> {
        let mut doc = dest.finish();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| Error::Serialize(e.to_string()))?;
        Ok(buffer)
    }
}

/// Clone a page dictionary, copying down any inheritable attribute it only
/// gets from an ancestor `Pages` node.
fn flatten_page(doc: &Document, page_id: ObjectId) -> Result<Dictionary> {
    let mut page = doc
        .get_dictionary(page_id)
        .map_err(|e| Error::Load(format!("page object {:?}: {}", page_id, e)))?
        .clone();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;
    while let Some(parent_id) = parent {
        depth += 1;
        if depth > MAX_TREE_DEPTH {
            break;
        }
        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };
        for key in INHERITABLE_KEYS {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key.to_vec(), value.clone());
                }
            }
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    page.remove(b"Parent");
    Ok(page)
}

fn object_type(object: &Object) -> Option<&[u8]> {
    let dict = match object {
        Object::Dictionary(dict) => dict,
        Object::Stream(stream) => &stream.dict,
        _ => return None,
    };
    dict.get(b"Type").and_then(Object::as_name).ok()
}
