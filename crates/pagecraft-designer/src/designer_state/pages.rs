//! Page operations and export planning for designer state.
//!
//! Switching pages clears the selection since selected ids belong to one page.

use super::DesignerState;
use crate::export::{plan_export, ExportConfig, ExportConfigError, PageExport};
use crate::model::{Background, Page};
use pagecraft_core::Result;

impl DesignerState {
    /// Adds a page after the current one and switches to it.
    pub fn add_page(&mut self) -> Result<usize> {
        let index = self.document.add_page(&mut self.ids);
        self.leave_page();
        self.commit("Add page")?;
        Ok(index)
    }

    /// Deletes a page and returns it. The last page cannot be deleted.
    pub fn delete_page(&mut self, index: usize) -> Result<Page> {
        let previous = self.document.current_page().id.clone();
        let removed = self.document.delete_page(index)?;
        if self.document.current_page().id != previous {
            self.leave_page();
        }
        self.commit("Delete page")?;
        Ok(removed)
    }

    /// Duplicates a page right after itself.
    pub fn duplicate_page(&mut self, index: usize) -> Result<usize> {
        let previous = self.document.current_page().id.clone();
        let copy = self.document.duplicate_page(index, &mut self.ids)?;
        if self.document.current_page().id != previous {
            self.leave_page();
        }
        self.commit("Duplicate page")?;
        Ok(copy)
    }

    /// Moves a page. The current page stays current.
    pub fn reorder_pages(&mut self, from: usize, to: usize) -> Result<()> {
        self.document.reorder_pages(from, to)?;
        if from != to {
            self.commit("Reorder pages")?;
        }
        Ok(())
    }

    /// Switches the page being edited. Not recorded in history.
    pub fn set_current_page(&mut self, index: usize) -> Result<()> {
        if index == self.document.current_page_index() {
            return Ok(());
        }
        self.document.set_current_page(index)?;
        self.leave_page();
        Ok(())
    }

    pub fn set_page_background(&mut self, background: Background) -> Result<()> {
        let page = self.document.current_page_mut();
        if page.background == background {
            return Ok(());
        }
        page.background = background;
        self.commit("Change background")
    }

    /// Validates an export request against the open document.
    pub fn export_plan(
        &self,
        config: &ExportConfig,
    ) -> std::result::Result<Vec<PageExport>, Vec<ExportConfigError>> {
        plan_export(&self.document, config)
    }

    fn leave_page(&mut self) {
        self.selection.deselect_all();
        self.drag = None;
    }
}
