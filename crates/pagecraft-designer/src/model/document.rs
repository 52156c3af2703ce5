//! Multi-page document.

use super::ids::IdGenerator;
use super::page::Page;
use pagecraft_core::{DesignerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered pages plus the index of the page being edited.
///
/// A document is never empty and `current_page_index` always addresses an
/// existing page. Page ids are unique, and so are the layer ids of each page
/// including group members. All of this is enforced by [`Document::with_pages`]
/// and by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DocumentData", into = "DocumentData")]
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) current_page_index: usize,
}

/// Unvalidated wire shape of a [`Document`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentData {
    pages: Vec<Page>,
    #[serde(default)]
    current_page_index: usize,
}

impl TryFrom<DocumentData> for Document {
    type Error = DesignerError;

    fn try_from(data: DocumentData) -> Result<Self> {
        Document::with_pages(data.pages, data.current_page_index)
    }
}

impl From<Document> for DocumentData {
    fn from(doc: Document) -> Self {
        Self {
            pages: doc.pages,
            current_page_index: doc.current_page_index,
        }
    }
}

impl Document {
    /// Creates a single-page document.
    pub fn new(first_page: Page) -> Self {
        Self {
            pages: vec![first_page],
            current_page_index: 0,
        }
    }

    /// Creates a blank single-page document of the given size.
    pub fn blank(width: u32, height: u32, ids: &mut IdGenerator) -> Self {
        Self::new(Page::new(ids.next_page_id(), "Page 1", width, height))
    }

    /// Creates a document from existing pages.
    pub fn with_pages(pages: Vec<Page>, current_page_index: usize) -> Result<Self> {
        if pages.is_empty() {
            return Err(DesignerError::EmptyDocument);
        }
        if current_page_index >= pages.len() {
            return Err(DesignerError::PageIndexOutOfRange {
                index: current_page_index,
                total: pages.len(),
            });
        }
        check_unique_ids(&pages)?;
        Ok(Self {
            pages,
            current_page_index,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page_index]
    }

    pub fn current_page_mut(&mut self) -> &mut Page {
        &mut self.pages[self.current_page_index]
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Switches the page being edited.
    pub fn set_current_page(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.current_page_index = index;
        Ok(())
    }

    /// Every page id and layer id in the document.
    pub fn all_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for page in &self.pages {
            ids.push(page.id.clone());
            ids.extend(page.all_layer_ids());
        }
        ids
    }

    /// Id generator aware of every id already in the document.
    pub fn id_generator(&self) -> IdGenerator {
        IdGenerator::with_taken(self.all_ids())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(DesignerError::PageIndexOutOfRange {
                index,
                total: self.pages.len(),
            });
        }
        Ok(())
    }
}

/// Rejects repeated page ids, and repeated layer ids within one page.
fn check_unique_ids(pages: &[Page]) -> Result<()> {
    let mut page_ids = HashSet::new();
    for page in pages {
        if !page_ids.insert(page.id.as_str()) {
            return Err(DesignerError::DuplicateId {
                id: page.id.clone(),
            });
        }

        let mut layer_ids = HashSet::new();
        for id in page.all_layer_ids() {
            if layer_ids.contains(&id) {
                tracing::warn!(page = %page.id, id = %id, "duplicate layer id");
                return Err(DesignerError::DuplicateId { id });
            }
            layer_ids.insert(id);
        }
    }
    Ok(())
}
