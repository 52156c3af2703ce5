//! Bridge between drawable objects reported by the scene graph and layers.
//!
//! The scene graph only carries an id back-reference on each drawable.
//! Everything else a layer knows (name, type, z-order) lives in the page's
//! layer list.

use super::ids::{IdGenerator, LayerId};
use super::layer::{Layer, LayerType};
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// A drawable as enumerated by the scene graph, bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub id: Option<LayerId>,
    /// Type tag, e.g. `"textbox"`, `"image"`, `"rect"`.
    #[serde(rename = "type")]
    pub type_token: String,
    #[serde(default)]
    pub name: Option<String>,
    pub transform: Transform,
    #[serde(default = "visible_default")]
    pub visible: bool,
    #[serde(default = "visible_default")]
    pub selectable: bool,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

fn visible_default() -> bool {
    true
}

impl SceneObject {
    pub fn new(type_token: impl Into<String>, transform: Transform) -> Self {
        Self {
            id: None,
            type_token: type_token.into(),
            name: None,
            transform,
            visible: true,
            selectable: true,
            objects: Vec::new(),
        }
    }
}

/// Assigns an id to `object` the first time it is seen.
///
/// Idempotent: an object that already carries an id keeps it.
pub fn ensure_layer_id<'a>(object: &'a mut SceneObject, ids: &mut IdGenerator) -> &'a str {
    let id = object.id.get_or_insert_with(|| ids.next_layer_id());
    ids.reserve(id.clone());
    id
}

/// Builds the layer for one drawable, assigning ids where missing.
pub fn to_layer(object: &mut SceneObject, ids: &mut IdGenerator) -> Layer {
    let layer_type = LayerType::from_token(&object.type_token);
    let id = ensure_layer_id(object, ids).to_string();
    let name = object
        .name
        .clone()
        .unwrap_or_else(|| layer_type.default_name().to_string());
    let children = object
        .objects
        .iter_mut()
        .map(|child| to_layer(child, ids))
        .collect();

    Layer {
        id,
        name,
        layer_type,
        visible: object.visible,
        locked: !object.selectable,
        transform: object.transform,
        children,
    }
}

/// Rebuilds the layer panel view from the drawables of a page.
///
/// The result has one layer per drawable in exactly reversed order, so index 0
/// is the topmost element.
pub fn sync_layers(objects: &mut [SceneObject], ids: &mut IdGenerator) -> Vec<Layer> {
    objects
        .iter_mut()
        .map(|object| to_layer(object, ids))
        .rev()
        .collect()
}
