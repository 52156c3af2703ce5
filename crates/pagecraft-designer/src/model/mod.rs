//! Document model: documents, pages, layers and their ids.
//!
//! - `ids`: id aliases and collision-free id generation
//! - `layer`: layers, layer types and derived element bounds
//! - `page`: pages and their bottom-to-top layer lists
//! - `document`: the never-empty page sequence with its current page
//! - `scene`: mapping drawables reported by the scene graph onto layers

mod document;
mod ids;
mod layer;
mod page;
mod scene;

pub use document::Document;
pub use ids::{IdGenerator, LayerId, PageId};
pub use layer::{
    find_layer_by_id, find_layer_index, rename_layer, toggle_lock, toggle_visibility,
    DrawableFlags, ElementBounds, Layer, LayerType,
};
pub use page::{Background, Page};
pub use scene::{ensure_layer_id, sync_layers, to_layer, SceneObject};
