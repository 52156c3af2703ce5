//! Designer state manager for UI integration.
//! Owns one open document and turns user gestures into state transitions.
//!
//! This module is split into submodules for better organization:
//! - `history`: Commit, undo and redo
//! - `selection`: Click, shift-click and select-all
//! - `layers`: Placing, grouping, deleting, reordering and flagging layers
//! - `transforms`: Transform edits, drags with snapping, align and distribute
//! - `pages`: Page operations and export planning
//!
//! Every gesture that changes the document commits exactly one history
//! entry. Drag updates move the element live but only the drag end commits.

mod history;
mod layers;
mod pages;
mod selection;
mod transforms;

use crate::alignment::{AlignmentConfig, SnapResult};
use crate::history::{History, Snapshot};
use crate::model::{Document, IdGenerator, LayerId, Page};
use crate::selection_manager::SelectionManager;
use crate::transform::Bounds;
use pagecraft_core::constants::{DEFAULT_MAX_HISTORY, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
use pagecraft_core::Result;

/// An element drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub id: LayerId,
    /// Bounds of the element when the drag started.
    pub origin: Bounds,
    /// Snap outcome of the latest drag update.
    pub last_snap: Option<SnapResult>,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) document: Document,
    pub selection: SelectionManager,
    pub(crate) history: History<Snapshot>,
    pub alignment: AlignmentConfig,
    pub(crate) ids: IdGenerator,
    pub(crate) drag: Option<DragState>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a state holding a blank single-page document.
    pub fn new() -> Self {
        let mut ids = IdGenerator::new();
        let document = Document::blank(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT, &mut ids);
        let mut state = Self {
            document,
            selection: SelectionManager::new(),
            history: History::new(DEFAULT_MAX_HISTORY),
            alignment: AlignmentConfig::default(),
            ids,
            drag: None,
            is_modified: false,
        };
        if let Err(err) = state.commit("New document") {
            tracing::warn!("Failed to capture initial snapshot: {}", err);
        }
        state.is_modified = false;
        state
    }

    /// Opens `document`, capturing it as the first history entry.
    pub fn from_document(
        document: Document,
        alignment: AlignmentConfig,
        max_history: usize,
    ) -> Result<Self> {
        let ids = document.id_generator();
        let mut state = Self {
            document,
            selection: SelectionManager::new(),
            history: History::new(max_history),
            alignment,
            ids,
            drag: None,
            is_modified: false,
        };
        state.commit("Open document")?;
        state.is_modified = false;
        tracing::info!(
            pages = state.document.page_count(),
            "Document opened"
        );
        Ok(state)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_page(&self) -> &Page {
        self.document.current_page()
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
