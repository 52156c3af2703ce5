//! Error handling for Pagecraft
//!
//! Every engine operation either fully succeeds or leaves its input state
//! untouched and reports one of these errors. None of them require retries:
//! they describe malformed input (bad page/layer index) or a refused
//! operation that would break a document invariant (deleting the last page).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Designer error type
///
/// Represents recoverable failures of document, layer, selection and
/// history operations.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A page index does not address an existing page
    #[error("Page index {index} out of range (pages: {total})")]
    PageIndexOutOfRange {
        /// The requested page index.
        index: usize,
        /// The number of pages in the document.
        total: usize,
    },

    /// The document must always keep at least one page
    #[error("Cannot delete the last remaining page")]
    LastPage,

    /// A document was constructed without pages
    #[error("Document must contain at least one page")]
    EmptyDocument,

    /// A layer id is not present on the page
    #[error("Layer not found: {id}")]
    LayerNotFound {
        /// The missing layer id.
        id: String,
    },

    /// Two pages, or two layers of one page, share an id
    #[error("Duplicate id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A layer list index does not address an existing layer
    #[error("Layer index {index} out of range (layers: {total})")]
    LayerIndexOutOfRange {
        /// The requested layer index.
        index: usize,
        /// The number of layers on the page.
        total: usize,
    },

    /// The layer is locked and cannot be transformed
    #[error("Layer is locked: {id}")]
    LayerLocked {
        /// The locked layer id.
        id: String,
    },

    /// Ungroup was requested on a layer that is not a group
    #[error("Layer is not a group: {id}")]
    NotAGroup {
        /// The offending layer id.
        id: String,
    },

    /// Grouping requires at least two layers
    #[error("Grouping requires at least 2 layers, got {count}")]
    NothingToGroup {
        /// The number of groupable layers that were found.
        count: usize,
    },

    /// Deletion was requested with nothing deletable selected
    #[error("Nothing to delete")]
    NothingToDelete,

    /// The operation needs a selected layer
    #[error("No layer selected")]
    NothingSelected,

    /// A transform would leave the element with a non-positive scale or negative size
    #[error("Invalid transform: {reason}")]
    InvalidTransform {
        /// Why the transform was rejected.
        reason: String,
    },

    /// No drag gesture is in progress
    #[error("No drag in progress")]
    NoActiveDrag,

    /// A document snapshot could not be captured or restored
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl DesignerError {
    /// Create an invalid transform error
    pub fn invalid_transform(reason: impl Into<String>) -> Self {
        Self::InvalidTransform {
            reason: reason.into(),
        }
    }

    /// Create a layer-not-found error
    pub fn layer_not_found(id: impl Into<String>) -> Self {
        Self::LayerNotFound { id: id.into() }
    }
}

/// Result type alias for designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
