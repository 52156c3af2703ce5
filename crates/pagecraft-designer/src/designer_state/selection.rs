//! Selection operations for designer state.
//!
//! Selection is not part of the document and never commits history.

use super::DesignerState;
use crate::selection_manager::Selection;

impl DesignerState {
    /// Selects a layer on the current page. `multi` toggles instead of replacing.
    ///
    /// Returns false when the id is not on the current page.
    pub fn select(&mut self, id: &str, multi: bool) -> bool {
        if self.document.current_page().find_layer_index(id).is_none() {
            return false;
        }
        self.selection.select_id(id, multi);
        true
    }

    /// Replaces the selection, keeping only ids present on the current page.
    pub fn set_selection(&mut self, selection: Selection) {
        let mut selection = selection;
        selection.retain_existing(&self.document.current_page().layers);
        self.selection.set_selection(selection);
    }

    pub fn select_all(&mut self) {
        self.selection
            .select_all(&self.document.current_page().layers);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn selected_ids(&self) -> &[String] {
        self.selection.selection().ids()
    }
}
