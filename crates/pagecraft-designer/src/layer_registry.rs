//! Z-order registry.
//!
//! The page's layer list is the single source of truth: index 0 is the
//! bottom (back) element. The layers panel shows the same list reversed, so
//! its index 0 is the topmost element. Conversions between the two go through
//! [`view_to_seq_index`] and [`seq_to_view_index`] only.

use crate::model::{find_layer_index, Layer, LayerId};
use serde::{Deserialize, Serialize};

/// Converts a panel index (0 = top) to a backing index (0 = bottom).
pub fn view_to_seq_index(view_index: usize, total: usize) -> Option<usize> {
    (view_index < total).then(|| total - 1 - view_index)
}

/// Converts a backing index (0 = bottom) to a panel index (0 = top).
pub fn seq_to_view_index(seq_index: usize, total: usize) -> Option<usize> {
    // The mapping is its own inverse.
    view_to_seq_index(seq_index, total)
}

/// Moves the item at `from` to `to` (remove then reinsert).
///
/// Returns false, leaving `items` untouched, when the indices are equal or
/// either is out of range.
pub fn reorder_layers<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Reorders using panel indices, as dragged in the layers panel.
pub fn reorder(layers: &mut Vec<Layer>, from_view: usize, to_view: usize) -> bool {
    let total = layers.len();
    match (
        view_to_seq_index(from_view, total),
        view_to_seq_index(to_view, total),
    ) {
        (Some(from), Some(to)) => reorder_layers(layers, from, to),
        _ => false,
    }
}

/// The layers in panel order, topmost first.
pub fn view_order(layers: &[Layer]) -> Vec<&Layer> {
    layers.iter().rev().collect()
}

fn move_to(layers: &mut Vec<Layer>, id: &str, target: impl FnOnce(usize, usize) -> usize) -> bool {
    let Some(from) = find_layer_index(layers, id) else {
        return false;
    };
    let to = target(from, layers.len());
    reorder_layers(layers, from, to)
}

/// Moves `id` to the top of the stack.
pub fn bring_to_front(layers: &mut Vec<Layer>, id: &str) -> bool {
    move_to(layers, id, |_, total| total - 1)
}

/// Moves `id` to the bottom of the stack.
pub fn send_to_back(layers: &mut Vec<Layer>, id: &str) -> bool {
    move_to(layers, id, |_, _| 0)
}

/// Moves `id` one step towards the front.
pub fn bring_forward(layers: &mut Vec<Layer>, id: &str) -> bool {
    move_to(layers, id, |from, total| (from + 1).min(total - 1))
}

/// Moves `id` one step towards the back.
pub fn send_backward(layers: &mut Vec<Layer>, id: &str) -> bool {
    move_to(layers, id, |from, _| from.saturating_sub(1))
}

/// Absolute stacking position to request from the drawable collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrderRequest {
    pub id: LayerId,
    pub z_index: usize,
}

/// Stacking position of `id`, bottom = 0.
pub fn z_index_of(layers: &[Layer], id: &str) -> Option<ZOrderRequest> {
    find_layer_index(layers, id).map(|z_index| ZOrderRequest {
        id: id.to_string(),
        z_index,
    })
}

/// Stacking requests for every layer, bottom to top.
pub fn z_order_requests(layers: &[Layer]) -> Vec<ZOrderRequest> {
    layers
        .iter()
        .enumerate()
        .map(|(z_index, l)| ZOrderRequest {
            id: l.id.clone(),
            z_index,
        })
        .collect()
}
