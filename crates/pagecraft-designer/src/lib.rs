//! # Pagecraft Designer
//!
//! The editing engine behind multi-page poster and graphic compositions.
//! Rendering and hit-testing belong to an external scene graph; this crate
//! owns everything the user edits: pages, layers and their z-order,
//! selection and grouping, snapping, undo history and export requests.
//!
//! ## Core Components
//!
//! ### Document Model
//! - **Transform**: Move, scale and rotate arithmetic
//! - **Model**: Documents, pages, layers and collision-free ids
//! - **Pages**: Add, delete, duplicate and reorder pages
//!
//! ### Editing
//! - **Selection Manager**: Selection sets, grouping, ungrouping and deletion
//! - **Layer Registry**: Z-order and the reversed layers-panel view
//! - **Alignment**: Snap guides, batch align and distribute
//!
//! ### Session
//! - **History**: Bounded undo/redo over document snapshots
//! - **Export**: Export sizing and request validation
//! - **Designer State**: One open document driven by user gestures
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one open document)
//!   ├── Document
//!   │     └── Pages
//!   │           └── Layers (bottom to top, groups nest)
//!   ├── SelectionManager
//!   ├── AlignmentConfig ── calculate_snap on every drag update
//!   └── History (one snapshot per completed gesture)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_designer::{DesignerState, LayerType, Transform};
//!
//! let mut state = DesignerState::new();
//! let id = state
//!     .place_element(LayerType::Text, Transform::new(10.0, 10.0, 200.0, 40.0), None)
//!     .unwrap();
//! assert_eq!(state.current_page().layers[0].name, "Text 1");
//!
//! state.undo().unwrap();
//! assert!(state.current_page().find_layer_by_id(&id).is_none());
//! ```

pub mod alignment;
pub mod export;
pub mod history;
pub mod layer_registry;
pub mod model;
pub mod pages;
pub mod selection_manager;
pub mod transform;

// Integration modules
pub mod designer_state;

// Re-export all public types from submodules
pub use alignment::{
    align_elements, calculate_snap, candidate_lines, distribute_elements, AlignDirection,
    AlignmentConfig, AlignmentLine, Axis, DistributeDirection, LineSource, SnapResult,
};
pub use export::{
    compute_export_size, plan_export, validate_config, validate_page_indices, ExportConfig,
    ExportConfigError, ExportFormat, ExportSize, PageExport, PageIndexPartition,
};
pub use history::{History, HistoryEntry, Snapshot};
pub use layer_registry::{
    bring_forward, bring_to_front, reorder, reorder_layers, send_backward, send_to_back,
    seq_to_view_index, view_to_seq_index, z_index_of, ZOrderRequest,
};
pub use model::{
    Background, Document, DrawableFlags, ElementBounds, IdGenerator, Layer, LayerId, LayerType,
    Page, PageId, SceneObject,
};
pub use selection_manager::{DeletionOutcome, Selection, SelectionManager};
pub use transform::{
    is_valid_transform, move_by, rotate, scale, Bounds, Delta, Position, ScaleFactors, Transform,
    TransformPartial,
};

// State and integration
pub use designer_state::{DesignerState, DragState};

pub use pagecraft_core::{DesignerError, Result};
