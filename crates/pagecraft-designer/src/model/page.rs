//! Pages: fixed-size canvases holding a bottom-to-top layer list.

use super::ids::{LayerId, PageId};
use super::layer::{find_layer_by_id, find_layer_index, ElementBounds, Layer, LayerType};
use pagecraft_core::constants::DEFAULT_BACKGROUND_COLOR;
use serde::{Deserialize, Serialize};

/// Page background fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    Solid { color: String },
    Transparent,
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid {
            color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// One canvas surface of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Background,
    /// Backing layer sequence; index 0 is the bottom of the z-order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Page {
    /// Creates an empty page with the default background.
    pub fn new(id: impl Into<PageId>, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            background: Background::default(),
            layers: Vec::new(),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn find_layer_by_id(&self, id: &str) -> Option<&Layer> {
        find_layer_by_id(&self.layers, id)
    }

    pub fn find_layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn find_layer_index(&self, id: &str) -> Option<usize> {
        find_layer_index(&self.layers, id)
    }

    /// Top-level layer ids, bottom to top.
    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.id.clone()).collect()
    }

    /// Every layer id on the page, including group members.
    pub fn all_layer_ids(&self) -> Vec<LayerId> {
        let mut ids = Vec::new();
        for layer in &self.layers {
            layer.visit(&mut |l| ids.push(l.id.clone()));
        }
        ids
    }

    /// Bounds of every top-level layer, bottom to top.
    pub fn element_bounds(&self) -> Vec<ElementBounds> {
        self.layers.iter().map(Layer::element_bounds).collect()
    }

    /// Bounds of every visible top-level layer except `exclude`.
    pub fn other_element_bounds(&self, exclude: &[LayerId]) -> Vec<ElementBounds> {
        self.layers
            .iter()
            .filter(|l| l.visible && !exclude.contains(&l.id))
            .map(Layer::element_bounds)
            .collect()
    }

    /// Next default layer name for `layer_type`, e.g. "Text 3".
    pub fn next_layer_name(&self, layer_type: LayerType) -> String {
        let count = self
            .layers
            .iter()
            .filter(|l| l.layer_type == layer_type)
            .count();
        format!("{} {}", layer_type.default_name(), count + 1)
    }
}
