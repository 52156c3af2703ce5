//! Layers: the identity, type and visibility/lock state of one placed element.

use super::ids::LayerId;
use crate::transform::{Bounds, Delta, Transform};
use serde::{Deserialize, Serialize};

/// The kind of element a layer represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Text,
    Image,
    Shape,
    Group,
}

impl LayerType {
    /// Maps a drawable type tag onto a layer type.
    ///
    /// `i-text`, `text` and `textbox` are text; unknown tags are shapes.
    pub fn from_token(token: &str) -> Self {
        match token {
            "i-text" | "text" | "textbox" => Self::Text,
            "image" => Self::Image,
            "group" => Self::Group,
            _ => Self::Shape,
        }
    }

    /// Base name given to new layers of this type.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Shape => "Shape",
            Self::Group => "Group",
        }
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Flags the drawable collaborator mirrors from a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableFlags {
    pub selectable: bool,
    pub evented: bool,
    pub visible: bool,
}

/// Bounds of a layer together with its id, derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBounds {
    pub id: LayerId,
    pub bounds: Bounds,
}

impl ElementBounds {
    pub fn new(id: impl Into<LayerId>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    pub fn left(&self) -> f64 {
        self.bounds.left
    }

    pub fn top(&self) -> f64 {
        self.bounds.top
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn center_x(&self) -> f64 {
        self.bounds.center_x()
    }

    pub fn center_y(&self) -> f64 {
        self.bounds.center_y()
    }
}

/// One placed element. Its position in the page's layer list is its z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub layer_type: LayerType,
    pub visible: bool,
    pub locked: bool,
    pub transform: Transform,
    /// Members of a group, bottom to top. Always empty for other types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Layer>,
}

impl Layer {
    /// Creates a visible, unlocked layer.
    pub fn new(
        id: impl Into<LayerId>,
        name: impl Into<String>,
        layer_type: LayerType,
        transform: Transform,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer_type,
            visible: true,
            locked: false,
            transform,
            children: Vec::new(),
        }
    }

    /// Creates a group layer wrapping `children`, placed at their union bounds.
    pub fn group(id: impl Into<LayerId>, name: impl Into<String>, children: Vec<Layer>) -> Self {
        let child_bounds: Vec<Bounds> = children.iter().map(Layer::bounds).collect();
        let union = Bounds::union_all(&child_bounds).unwrap_or_default();
        Self {
            children,
            ..Self::new(
                id,
                name,
                LayerType::Group,
                Transform::new(union.left, union.top, union.width, union.height),
            )
        }
    }

    pub fn is_group(&self) -> bool {
        self.layer_type == LayerType::Group
    }

    /// Current axis-aligned bounds. A group's bounds are the union of its children.
    pub fn bounds(&self) -> Bounds {
        if self.is_group() && !self.children.is_empty() {
            let child_bounds: Vec<Bounds> = self.children.iter().map(Layer::bounds).collect();
            if let Some(union) = Bounds::union_all(&child_bounds) {
                return union;
            }
        }
        self.transform.bounds()
    }

    pub fn element_bounds(&self) -> ElementBounds {
        ElementBounds::new(self.id.clone(), self.bounds())
    }

    /// Moves the layer, and every child of a group, by `delta`.
    pub fn translate(&mut self, delta: Delta) {
        self.transform = self.transform.translated(delta);
        for child in &mut self.children {
            child.translate(delta);
        }
    }

    /// Flags the drawable must carry: locked layers are neither selectable
    /// nor interactive, hidden layers are invisible.
    pub fn drawable_flags(&self) -> DrawableFlags {
        DrawableFlags {
            selectable: !self.locked,
            evented: !self.locked,
            visible: self.visible,
        }
    }

    /// Visits this layer and all nested children.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Layer)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// Returns a copy with `visible` flipped.
pub fn toggle_visibility(layer: &Layer) -> Layer {
    Layer {
        visible: !layer.visible,
        ..layer.clone()
    }
}

/// Returns a copy with `locked` flipped.
pub fn toggle_lock(layer: &Layer) -> Layer {
    Layer {
        locked: !layer.locked,
        ..layer.clone()
    }
}

/// Returns a copy with a new name.
pub fn rename_layer(layer: &Layer, name: impl Into<String>) -> Layer {
    Layer {
        name: name.into(),
        ..layer.clone()
    }
}

/// Finds a top-level layer by id.
pub fn find_layer_by_id<'a>(layers: &'a [Layer], id: &str) -> Option<&'a Layer> {
    layers.iter().find(|l| l.id == id)
}

/// Index of a top-level layer in the list, by id.
pub fn find_layer_index(layers: &[Layer], id: &str) -> Option<usize> {
    layers.iter().position(|l| l.id == id)
}
