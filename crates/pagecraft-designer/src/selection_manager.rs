use crate::model::{find_layer_index, IdGenerator, Layer, LayerId};
use pagecraft_core::{DesignerError, Result};

/// A set of selected layer ids.
///
/// Ids are unique. Insertion order is kept for display, but equality is set
/// equality: two selections holding the same ids in a different order are equal.
#[derive(Debug, Clone, Default, Eq)]
pub struct Selection {
    ids: Vec<LayerId>,
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.ids.len() == other.ids.len() && self.ids.iter().all(|id| other.contains(id))
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from ids, dropping duplicates.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LayerId>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id.into());
        }
        selection
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[LayerId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerId> {
        self.ids.iter()
    }

    /// Adds `id`; returns false if it was already selected.
    pub fn insert(&mut self, id: impl Into<LayerId>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`; returns false if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    /// Adds `id` when absent, removes it when present.
    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that are not top-level layers of `layers`.
    pub fn retain_existing(&mut self, layers: &[Layer]) {
        self.ids.retain(|id| find_layer_index(layers, id).is_some());
    }
}

/// Returns `current` with `id` toggled.
pub fn toggle_selection(current: &Selection, id: &str) -> Selection {
    let mut next = current.clone();
    next.toggle(id);
    next
}

/// Grouping needs at least two selected elements.
pub fn can_group(selected_count: usize) -> bool {
    selected_count >= 2
}

/// Layer count after folding `grouped` layers into one group.
///
/// `None` when `grouped` exceeds `original`.
pub fn grouped_count(original: usize, grouped: usize) -> Option<usize> {
    original.checked_sub(grouped)?.checked_add(1)
}

/// Only groups can be ungrouped.
pub fn can_ungroup(target: &Layer) -> bool {
    target.is_group()
}

/// Layer count after replacing one group with its `children` members.
///
/// `None` when there is no layer to ungroup.
pub fn ungrouped_count(original: usize, children: usize) -> Option<usize> {
    original.checked_sub(1)?.checked_add(children)
}

/// Deleting needs a non-empty selection.
pub fn can_delete(selected_count: usize) -> bool {
    selected_count > 0
}

/// Selected ids that can be deleted: everything selected except locked layers.
pub fn deletable_ids(layers: &[Layer], selection: &Selection) -> Vec<LayerId> {
    layers
        .iter()
        .filter(|l| selection.contains(&l.id) && !l.locked)
        .map(|l| l.id.clone())
        .collect()
}

/// Result of deleting the selection from a layer list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionOutcome {
    /// Ids removed from the layer list, bottom to top.
    pub removed: Vec<LayerId>,
    /// What remains selected: the locked layers that could not be deleted.
    pub selection: Selection,
}

/// Folds the layers named by `ids` into a new group.
///
/// The group takes the z-position of the topmost grouped layer and keeps the
/// members' relative order. Ids not present at the top level are ignored.
pub fn group_layers(
    layers: &mut Vec<Layer>,
    ids: &[LayerId],
    group_id: LayerId,
    name: impl Into<String>,
) -> Result<LayerId> {
    let indices: Vec<usize> = layers
        .iter()
        .enumerate()
        .filter(|(_, l)| ids.contains(&l.id))
        .map(|(i, _)| i)
        .collect();

    if !can_group(indices.len()) {
        return Err(DesignerError::NothingToGroup {
            count: indices.len(),
        });
    }

    let topmost = indices[indices.len() - 1];
    let insert_at = topmost + 1 - indices.len();

    let mut children = Vec::with_capacity(indices.len());
    for &index in indices.iter().rev() {
        children.push(layers.remove(index));
    }
    children.reverse();

    layers.insert(insert_at, Layer::group(group_id.clone(), name, children));
    Ok(group_id)
}

/// Replaces the group `group_id` with its members, in place.
///
/// Returns the released member ids, bottom to top.
pub fn ungroup_layer(layers: &mut Vec<Layer>, group_id: &str) -> Result<Vec<LayerId>> {
    let index =
        find_layer_index(layers, group_id).ok_or_else(|| DesignerError::layer_not_found(group_id))?;
    if !can_ungroup(&layers[index]) {
        return Err(DesignerError::NotAGroup {
            id: group_id.to_string(),
        });
    }

    let group = layers.remove(index);
    let released: Vec<LayerId> = group.children.iter().map(|c| c.id.clone()).collect();
    layers.splice(index..index, group.children);
    Ok(released)
}

/// Removes every deletable selected layer.
pub fn delete_layers(layers: &mut Vec<Layer>, selection: &Selection) -> Result<DeletionOutcome> {
    if !can_delete(selection.len()) {
        return Err(DesignerError::NothingToDelete);
    }
    let removed = deletable_ids(layers, selection);
    if removed.is_empty() {
        return Err(DesignerError::NothingToDelete);
    }

    layers.retain(|l| !removed.contains(&l.id));

    let mut remaining = selection.clone();
    remaining.retain_existing(layers);

    Ok(DeletionOutcome {
        removed,
        selection: remaining,
    })
}

/// Manages selection state for one page.
///
/// `SelectionManager` is responsible for:
/// - Tracking the selected layer ids and the "primary" (last clicked) one
/// - Click, shift-click and select-all semantics
/// - Grouping, ungrouping and deleting the current selection
///
/// # Selection Model
///
/// - **Primary Selection**: the most recently selected id, shown in property panels
/// - **Multiple Selection**: any number of ids, held in a [`Selection`]
/// - **Multi-select**: shift-click toggles an id without touching the others
///
/// Selection is editor state, not document state: it is never recorded in history.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selection: Selection,
    primary: Option<LayerId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecraft_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// assert!(manager.selection().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the primary selected id.
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selects a layer by id.
    ///
    /// # Arguments
    ///
    /// * `id` - The layer to select
    /// * `multi` - If `true`, toggles `id` and keeps the rest; if `false`, replaces the selection
    pub fn select_id(&mut self, id: &str, multi: bool) {
        if multi {
            self.selection.toggle(id);
            if self.selection.contains(id) {
                self.primary = Some(id.to_string());
            } else if self.primary.as_deref() == Some(id) {
                self.primary = self.selection.ids().last().cloned();
            }
        } else {
            self.selection = Selection::from_ids([id]);
            self.primary = Some(id.to_string());
        }
    }

    /// Replaces the selection wholesale, e.g. after a marquee drag.
    pub fn set_selection(&mut self, selection: Selection) {
        self.primary = selection.ids().last().cloned();
        self.selection = selection;
    }

    /// Selects every visible top-level layer.
    ///
    /// The primary selection becomes the topmost one.
    pub fn select_all(&mut self, layers: &[Layer]) {
        self.selection = Selection::from_ids(
            layers
                .iter()
                .filter(|l| l.visible)
                .map(|l| l.id.clone()),
        );
        self.primary = self.selection.ids().last().cloned();
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.primary = None;
    }

    /// Drops ids that no longer exist on the page, e.g. after undo.
    pub fn retain_existing(&mut self, layers: &[Layer]) {
        self.selection.retain_existing(layers);
        if let Some(primary) = &self.primary {
            if !self.selection.contains(primary) {
                self.primary = self.selection.ids().last().cloned();
            }
        }
    }

    /// Groups the selected layers; the new group becomes the selection.
    ///
    /// # Errors
    ///
    /// [`DesignerError::NothingToGroup`] when fewer than two selected layers exist.
    pub fn group_selected(
        &mut self,
        layers: &mut Vec<Layer>,
        ids: &mut IdGenerator,
    ) -> Result<LayerId> {
        let group_id = ids.next_layer_id();
        let name = {
            let groups = layers.iter().filter(|l| l.is_group()).count();
            format!("Group {}", groups + 1)
        };
        let group_id = group_layers(layers, self.selection.ids(), group_id, name)?;
        self.select_id(&group_id, false);
        Ok(group_id)
    }

    /// Ungroups the primary selection; its members become the selection.
    ///
    /// # Errors
    ///
    /// [`DesignerError::NotAGroup`] or [`DesignerError::LayerNotFound`].
    pub fn ungroup_selected(&mut self, layers: &mut Vec<Layer>) -> Result<Vec<LayerId>> {
        let target = self
            .primary
            .clone()
            .ok_or(DesignerError::NothingSelected)?;
        let released = ungroup_layer(layers, &target)?;
        self.set_selection(Selection::from_ids(released.iter().cloned()));
        Ok(released)
    }

    /// Deletes every unlocked selected layer. Locked layers stay selected.
    pub fn remove_selected(&mut self, layers: &mut Vec<Layer>) -> Result<Vec<LayerId>> {
        let outcome = delete_layers(layers, &self.selection)?;
        self.set_selection(outcome.selection);
        Ok(outcome.removed)
    }
}
