//! Transform operations (edit, drag, align, distribute) for designer state.

use super::{DesignerState, DragState};
use crate::alignment::{
    align_elements, calculate_snap, distribute_elements, AlignDirection, DistributeDirection,
    SnapResult,
};
use crate::model::{ElementBounds, Layer, LayerId};
use crate::transform::{Delta, Position, TransformPartial};
use pagecraft_core::{DesignerError, Result};
use std::collections::BTreeMap;

impl DesignerState {
    /// Applies a partial transform to one layer.
    ///
    /// Groups accept translation only; their members move with them.
    pub fn transform_layer(&mut self, id: &str, partial: &TransformPartial) -> Result<()> {
        let layer = self
            .document
            .current_page_mut()
            .find_layer_mut(id)
            .ok_or_else(|| DesignerError::layer_not_found(id))?;
        if layer.locked {
            return Err(DesignerError::LayerLocked { id: id.to_string() });
        }

        if layer.is_group() {
            if !partial.is_translation_only() {
                return Err(DesignerError::invalid_transform("groups can only be moved"));
            }
            let bounds = layer.bounds();
            let delta = Delta::new(
                partial.left.unwrap_or(bounds.left) - bounds.left,
                partial.top.unwrap_or(bounds.top) - bounds.top,
            );
            layer.translate(delta);
        } else {
            layer.transform = layer.transform.apply(partial)?;
        }

        self.commit("Transform layer")
    }

    /// Moves every selected unlocked layer by `delta`.
    pub fn move_selected(&mut self, delta: Delta) -> Result<usize> {
        if delta.is_zero() {
            return Ok(0);
        }
        let ids = self.movable_selection();
        if ids.is_empty() {
            return Err(DesignerError::NothingSelected);
        }
        let page = self.document.current_page_mut();
        for layer in page.layers.iter_mut().filter(|l| ids.contains(&l.id)) {
            layer.translate(delta);
        }
        self.commit("Move layers")?;
        Ok(ids.len())
    }

    /// Starts dragging `id`.
    pub fn begin_drag(&mut self, id: &str) -> Result<()> {
        let layer = self
            .document
            .current_page()
            .find_layer_by_id(id)
            .ok_or_else(|| DesignerError::layer_not_found(id))?;
        if layer.locked {
            return Err(DesignerError::LayerLocked { id: id.to_string() });
        }
        self.drag = Some(DragState {
            id: id.to_string(),
            origin: layer.bounds(),
            last_snap: None,
        });
        tracing::trace!(id, "Drag started");
        Ok(())
    }

    /// Moves the dragged element so its bounds start at `(left, top)`, snapped
    /// to the guides. Does not commit.
    pub fn drag_to(&mut self, left: f64, top: f64) -> Result<SnapResult> {
        let drag = self.drag.as_ref().ok_or(DesignerError::NoActiveDrag)?;
        let id = drag.id.clone();
        let size = drag.origin;

        let page = self.document.current_page();
        let mut requested = size;
        requested.left = left;
        requested.top = top;
        let moving = ElementBounds::new(id.clone(), requested);
        let others = page.other_element_bounds(std::slice::from_ref(&id));
        let snap = calculate_snap(
            &moving,
            &others,
            f64::from(page.width),
            f64::from(page.height),
            &self.alignment,
        );

        self.place_at(&id, snap.position())?;
        if let Some(drag) = self.drag.as_mut() {
            drag.last_snap = Some(snap.clone());
        }
        Ok(snap)
    }

    /// Finishes the drag, committing once if the element moved.
    pub fn end_drag(&mut self) -> Result<Option<SnapResult>> {
        let drag = self.drag.take().ok_or(DesignerError::NoActiveDrag)?;
        let moved = self
            .document
            .current_page()
            .find_layer_by_id(&drag.id)
            .is_some_and(|l| l.bounds().position() != drag.origin.position());
        if moved {
            self.commit("Move layer")?;
        }
        tracing::trace!(id = %drag.id, moved, "Drag ended");
        Ok(drag.last_snap)
    }

    /// Abandons the drag and puts the element back where it started.
    pub fn cancel_drag(&mut self) -> Result<()> {
        let drag = self.drag.take().ok_or(DesignerError::NoActiveDrag)?;
        self.place_at(&drag.id, drag.origin.position())?;
        Ok(())
    }

    /// Aligns the selected unlocked layers.
    pub fn align_selected(&mut self, direction: AlignDirection) -> Result<usize> {
        let page = self.document.current_page();
        let elements = self.movable_bounds();
        if elements.is_empty() {
            return Err(DesignerError::NothingSelected);
        }
        let positions = align_elements(
            &elements,
            direction,
            f64::from(page.width),
            f64::from(page.height),
        );
        let moved = self.apply_positions(&positions)?;
        if moved > 0 {
            self.commit("Align layers")?;
        }
        Ok(moved)
    }

    /// Spaces the selected unlocked layers evenly. Fewer than three is a no-op.
    pub fn distribute_selected(&mut self, direction: DistributeDirection) -> Result<usize> {
        let elements = self.movable_bounds();
        let positions = distribute_elements(&elements, direction);
        let moved = self.apply_positions(&positions)?;
        if moved > 0 {
            self.commit("Distribute layers")?;
        }
        Ok(moved)
    }

    fn movable_selection(&self) -> Vec<LayerId> {
        self.document
            .current_page()
            .layers
            .iter()
            .filter(|l| !l.locked && self.selection.is_selected(&l.id))
            .map(|l| l.id.clone())
            .collect()
    }

    fn movable_bounds(&self) -> Vec<ElementBounds> {
        let ids = self.movable_selection();
        self.document
            .current_page()
            .layers
            .iter()
            .filter(|l| ids.contains(&l.id))
            .map(Layer::element_bounds)
            .collect()
    }

    /// Moves each layer so its bounds start at the given position.
    /// Returns how many layers actually moved.
    fn apply_positions(&mut self, positions: &BTreeMap<LayerId, Position>) -> Result<usize> {
        let mut moved = 0;
        for (id, position) in positions {
            if self.place_at(id, *position)? {
                moved += 1;
            }
        }
        Ok(moved)
    }

    fn place_at(&mut self, id: &str, position: Position) -> Result<bool> {
        let layer = self
            .document
            .current_page_mut()
            .find_layer_mut(id)
            .ok_or_else(|| DesignerError::layer_not_found(id))?;
        let current = layer.bounds().position();
        let delta = Delta::new(position.left - current.left, position.top - current.top);
        if delta.is_zero() {
            return Ok(false);
        }
        layer.translate(delta);
        Ok(true)
    }
}
