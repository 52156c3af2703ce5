//! Bounded linear undo/redo over document snapshots.
//!
//! The history holds a list of snapshots and a cursor into it. Committing a
//! new snapshot while the cursor is not at the top discards the redo future
//! first; once the list grows past `max_history` the oldest entries are
//! dropped. Callers commit one entry per completed gesture, never per drag
//! preview, and capture the freshly loaded document as entry 0.

use crate::model::Document;
use chrono::{DateTime, Utc};
use pagecraft_core::constants::DEFAULT_MAX_HISTORY;
use pagecraft_core::Result;
use serde::{Deserialize, Serialize};

/// Serialized document state. Only equality and storage matter to the history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    /// Serializes `document`.
    pub fn capture(document: &Document) -> Result<Self> {
        Ok(Self(serde_json::to_vec(document)?))
    }

    /// Rebuilds the document this snapshot was captured from.
    pub fn restore(&self) -> Result<Document> {
        Ok(serde_json::from_slice(&self.0)?)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One committed state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<T> {
    pub snapshot: T,
    /// What produced this state, e.g. "Group layers".
    pub label: String,
    pub captured_at: DateTime<Utc>,
}

/// Undo/redo history.
#[derive(Debug, Clone)]
pub struct History<T = Snapshot> {
    entries: Vec<HistoryEntry<T>>,
    current_index: Option<usize>,
    max_history: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl<T> History<T> {
    /// Creates an empty history keeping at most `max_history` entries (at least one).
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: Vec::new(),
            current_index: None,
            max_history: max_history.max(1),
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Cursor position; `None` until the first commit.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    /// Commits a new state on top of the cursor.
    pub fn add_state(&mut self, snapshot: T, label: impl Into<String>) {
        if let Some(index) = self.current_index {
            self.entries.truncate(index + 1);
        } else {
            self.entries.clear();
        }

        self.entries.push(HistoryEntry {
            snapshot,
            label: label.into(),
            captured_at: Utc::now(),
        });

        if self.entries.len() > self.max_history {
            let excess = self.entries.len() - self.max_history;
            self.entries.drain(..excess);
        }

        self.current_index = Some(self.entries.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.current_index, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.current_index, Some(i) if i + 1 < self.entries.len())
    }

    /// Steps back one entry and returns the state to restore.
    pub fn undo(&mut self) -> Option<&T> {
        let index = self.current_index.filter(|&i| i > 0)? - 1;
        self.current_index = Some(index);
        Some(&self.entries[index].snapshot)
    }

    /// Steps forward one entry and returns the state to restore.
    pub fn redo(&mut self) -> Option<&T> {
        let index = self.current_index? + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.current_index = Some(index);
        Some(&self.entries[index].snapshot)
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&HistoryEntry<T>> {
        self.current_index.map(|i| &self.entries[i])
    }

    /// Label of the entry that `undo` would revert.
    pub fn undo_label(&self) -> Option<&str> {
        self.can_undo()
            .then(|| self.current().map(|e| e.label.as_str()))
            .flatten()
    }

    /// Label of the entry that `redo` would reapply.
    pub fn redo_label(&self) -> Option<&str> {
        let next = self.current_index? + 1;
        self.entries.get(next).map(|e| e.label.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_index = None;
    }
}
