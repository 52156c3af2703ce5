//! Undo/redo functionality for designer state.

use super::DesignerState;
use crate::history::Snapshot;
use crate::model::Document;
use pagecraft_core::Result;

impl DesignerState {
    /// Captures the current document as a new history entry.
    pub fn commit(&mut self, label: &str) -> Result<()> {
        let snapshot = Snapshot::capture(&self.document)?;
        self.history.add_state(snapshot, label);
        self.is_modified = true;
        tracing::debug!(
            label,
            index = ?self.history.current_index(),
            entries = self.history.len(),
            "History committed"
        );
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reverts to the previous entry. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(restored) = self.history.undo().map(Snapshot::restore) else {
            return Ok(false);
        };
        match restored {
            Ok(document) => {
                self.apply_restored(document);
                Ok(true)
            }
            Err(err) => {
                self.history.redo();
                Err(err)
            }
        }
    }

    /// Reapplies the next entry. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(restored) = self.history.redo().map(Snapshot::restore) else {
            return Ok(false);
        };
        match restored {
            Ok(document) => {
                self.apply_restored(document);
                Ok(true)
            }
            Err(err) => {
                self.history.undo();
                Err(err)
            }
        }
    }

    fn apply_restored(&mut self, document: Document) {
        self.document = document;
        self.drag = None;
        for id in self.document.all_ids() {
            self.ids.reserve(id);
        }
        self.selection
            .retain_existing(&self.document.current_page().layers);
        self.is_modified = true;
    }
}
