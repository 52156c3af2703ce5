//! Layer operations (place, group, delete, reorder, flags) for designer state.

use super::DesignerState;
use crate::layer_registry;
use crate::model::{
    rename_layer, sync_layers, toggle_lock, toggle_visibility, DrawableFlags, Layer, LayerId,
    LayerType, SceneObject,
};
use crate::transform::Transform;
use pagecraft_core::{DesignerError, Result};

impl DesignerState {
    /// Places a new element on top of the current page and selects it.
    ///
    /// Without a name the layer gets the next default name for its type.
    pub fn place_element(
        &mut self,
        layer_type: LayerType,
        transform: Transform,
        name: Option<String>,
    ) -> Result<LayerId> {
        if transform.width < 0.0 || transform.height < 0.0 {
            return Err(DesignerError::invalid_transform("size must not be negative"));
        }
        if transform.scale_x <= 0.0 || transform.scale_y <= 0.0 {
            return Err(DesignerError::invalid_transform("scale must be > 0"));
        }

        let id = self.ids.next_layer_id();
        let page = self.document.current_page_mut();
        let name = name.unwrap_or_else(|| page.next_layer_name(layer_type));
        let mut transform = transform;
        transform.angle = crate::transform::rotate(transform.angle, 0.0);
        page.layers
            .push(Layer::new(id.clone(), name, layer_type, transform));

        self.selection.select_id(&id, false);
        self.commit(&format!("Add {}", layer_type))?;
        Ok(id)
    }

    /// Replaces the current page's layers with the drawables reported by the
    /// scene graph, assigning ids to drawables seen for the first time.
    pub fn sync_scene(&mut self, objects: &mut [SceneObject]) -> Result<Vec<Layer>> {
        let view = sync_layers(objects, &mut self.ids);
        let page = self.document.current_page_mut();
        page.layers = view.iter().rev().cloned().collect();
        self.selection.retain_existing(&page.layers);
        self.commit("Sync scene")?;
        Ok(view)
    }

    /// Layers of the current page in panel order, topmost first.
    pub fn layer_view(&self) -> Vec<&Layer> {
        layer_registry::view_order(&self.document.current_page().layers)
    }

    /// Groups the selected layers into a new group.
    pub fn group_selected(&mut self) -> Result<LayerId> {
        let layers = &mut self.document.current_page_mut().layers;
        let group_id = self.selection.group_selected(layers, &mut self.ids)?;
        tracing::debug!(id = %group_id, "Layers grouped");
        self.commit("Group layers")?;
        Ok(group_id)
    }

    /// Ungroups the primary selected group.
    pub fn ungroup_selected(&mut self) -> Result<Vec<LayerId>> {
        let layers = &mut self.document.current_page_mut().layers;
        let released = self.selection.ungroup_selected(layers)?;
        tracing::debug!(count = released.len(), "Group released");
        self.commit("Ungroup")?;
        Ok(released)
    }

    /// Deletes the selected unlocked layers. Locked layers stay selected.
    pub fn delete_selected(&mut self) -> Result<Vec<LayerId>> {
        let layers = &mut self.document.current_page_mut().layers;
        let removed = self.selection.remove_selected(layers)?;
        tracing::debug!(count = removed.len(), "Layers deleted");
        self.commit("Delete layers")?;
        Ok(removed)
    }

    /// Moves a layer within the panel. Returns false when both indices are equal.
    ///
    /// # Errors
    ///
    /// [`DesignerError::LayerIndexOutOfRange`] when either panel index is past the
    /// last layer; the page is left untouched.
    pub fn reorder_layer(&mut self, from_view: usize, to_view: usize) -> Result<bool> {
        let layers = &mut self.document.current_page_mut().layers;
        let total = layers.len();
        if let Some(index) = [from_view, to_view].into_iter().find(|&i| i >= total) {
            tracing::warn!(index, total, "layer reorder out of range");
            return Err(DesignerError::LayerIndexOutOfRange { index, total });
        }
        if !layer_registry::reorder(layers, from_view, to_view) {
            return Ok(false);
        }
        self.commit("Reorder layers")?;
        Ok(true)
    }

    pub fn bring_to_front(&mut self, id: &str) -> Result<bool> {
        self.restack(id, "Bring to front", layer_registry::bring_to_front)
    }

    pub fn send_to_back(&mut self, id: &str) -> Result<bool> {
        self.restack(id, "Send to back", layer_registry::send_to_back)
    }

    pub fn bring_forward(&mut self, id: &str) -> Result<bool> {
        self.restack(id, "Bring forward", layer_registry::bring_forward)
    }

    pub fn send_backward(&mut self, id: &str) -> Result<bool> {
        self.restack(id, "Send backward", layer_registry::send_backward)
    }

    fn restack(
        &mut self,
        id: &str,
        label: &str,
        op: fn(&mut Vec<Layer>, &str) -> bool,
    ) -> Result<bool> {
        let layers = &mut self.document.current_page_mut().layers;
        if layers.iter().all(|l| l.id != id) {
            return Err(DesignerError::layer_not_found(id));
        }
        if !op(layers, id) {
            return Ok(false);
        }
        self.commit(label)?;
        Ok(true)
    }

    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool> {
        let visible = self.replace_layer(id, toggle_visibility)?.visible;
        self.commit(if visible { "Show layer" } else { "Hide layer" })?;
        Ok(visible)
    }

    pub fn toggle_lock(&mut self, id: &str) -> Result<bool> {
        let locked = self.replace_layer(id, toggle_lock)?.locked;
        self.commit(if locked { "Lock layer" } else { "Unlock layer" })?;
        Ok(locked)
    }

    pub fn rename_layer(&mut self, id: &str, name: &str) -> Result<()> {
        self.replace_layer(id, |layer| rename_layer(layer, name))?;
        self.commit("Rename layer")
    }

    fn replace_layer(&mut self, id: &str, f: impl FnOnce(&Layer) -> Layer) -> Result<&Layer> {
        let layer = self
            .document
            .current_page_mut()
            .find_layer_mut(id)
            .ok_or_else(|| DesignerError::layer_not_found(id))?;
        *layer = f(layer);
        Ok(layer)
    }

    /// Interaction flags to mirror onto the drawable of `id`.
    pub fn drawable_flags(&self, id: &str) -> Option<DrawableFlags> {
        self.document
            .current_page()
            .find_layer_by_id(id)
            .map(Layer::drawable_flags)
    }
}
