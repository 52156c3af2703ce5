//! Page operations on a [`Document`].
//!
//! Every operation either succeeds completely or returns an error with the
//! document untouched. A document always keeps at least one page.

use crate::model::{Document, IdGenerator, Layer, Page};
use pagecraft_core::{DesignerError, Result};

/// Gives `layer` and all of its descendants fresh ids.
fn reassign_layer_ids(layer: &mut Layer, ids: &mut IdGenerator) {
    layer.id = ids.next_layer_id();
    for child in &mut layer.children {
        reassign_layer_ids(child, ids);
    }
}

impl Document {
    /// Inserts a blank page after the current one and makes it current.
    ///
    /// The new page inherits the current page's size. Returns its index.
    pub fn add_page(&mut self, ids: &mut IdGenerator) -> usize {
        let (width, height) = {
            let current = self.current_page();
            (current.width, current.height)
        };
        let name = format!("Page {}", self.pages.len() + 1);
        let index = self.current_page_index + 1;

        self.pages
            .insert(index, Page::new(ids.next_page_id(), name, width, height));
        self.current_page_index = index;

        tracing::debug!(index, width, height, pages = self.pages.len(), "page added");
        index
    }

    /// Removes the page at `index` and returns it.
    ///
    /// Pages before the current one shift the current index down by one;
    /// deleting the current page keeps the index, clamped to the new last page.
    pub fn delete_page(&mut self, index: usize) -> Result<Page> {
        self.check_index(index)?;
        if self.pages.len() == 1 {
            tracing::warn!("refusing to delete the last page");
            return Err(DesignerError::LastPage);
        }

        let removed = self.pages.remove(index);
        let current = self.current_page_index;
        self.current_page_index = match index.cmp(&current) {
            std::cmp::Ordering::Less => current - 1,
            std::cmp::Ordering::Equal => current.min(self.pages.len() - 1),
            std::cmp::Ordering::Greater => current,
        };

        tracing::debug!(
            index,
            id = %removed.id,
            current = self.current_page_index,
            "page deleted"
        );
        Ok(removed)
    }

    /// Deep-copies the page at `index` right after it, with fresh ids throughout.
    ///
    /// Returns the index of the copy.
    pub fn duplicate_page(&mut self, index: usize, ids: &mut IdGenerator) -> Result<usize> {
        self.check_index(index)?;

        let mut copy = self.pages[index].clone();
        copy.id = ids.next_page_id();
        copy.name = format!("{} (copy)", copy.name);
        for layer in &mut copy.layers {
            reassign_layer_ids(layer, ids);
        }

        let target = index + 1;
        self.pages.insert(target, copy);
        if index <= self.current_page_index {
            self.current_page_index += 1;
        }

        tracing::debug!(
            source = index,
            index = target,
            current = self.current_page_index,
            "page duplicated"
        );
        Ok(target)
    }

    /// Moves the page at `from` to `to`.
    ///
    /// The current index follows the current page.
    pub fn reorder_pages(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }

        let page = self.pages.remove(from);
        self.pages.insert(to, page);

        let current = self.current_page_index;
        self.current_page_index = if current == from {
            to
        } else if from < current && to >= current {
            current - 1
        } else if from > current && to <= current {
            current + 1
        } else {
            current
        };

        tracing::debug!(from, to, current = self.current_page_index, "pages reordered");
        Ok(())
    }
}
